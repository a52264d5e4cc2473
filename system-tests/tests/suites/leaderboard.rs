// system-tests/tests/suites/leaderboard.rs
// ============================================================================
// Module: Leaderboard Tests
// Description: Paged ranking from `GET /leaderBoard`.
// Dependencies: investor-api-client, investor-api-model, helpers
// ============================================================================

use investor_api_client::PageQuery;
use investor_api_model::ResponseExpectation;

use crate::helpers::TestResult;
use crate::helpers::context::TestContext;
use crate::helpers::models;

#[test]
fn leaderboard_pages_ranked_users() -> TestResult {
    let mut ctx = TestContext::new("leaderboard_pages_ranked_users")?;
    let user = ctx.sign_up("leaderboard")?;
    let query = PageQuery {
        page_number: Some(1),
        page_size: Some(5),
    };
    let response = ctx.client.leaderboard(Some(&user.token), &query)?;
    ctx.expect("leaderboard", &response, &ResponseExpectation::with_model(200, models::leaderboard()))?;
    let page = response.page().ok_or("leaderboard body has no paging envelope")?;
    if page.page_number != 1 || page.page_size != 5 {
        return Err(format!("unexpected paging: {page:?}").into());
    }
    if response.items().len() > 5 {
        return Err(format!("page of 5 held {} rows", response.items().len()).into());
    }
    ctx.pass("first leaderboard page returned")?;
    Ok(())
}
