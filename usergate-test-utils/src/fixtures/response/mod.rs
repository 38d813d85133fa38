pub mod mockito;

use crate::TestContext;

impl TestContext {
    /// Helpers registering fixture-backed endpoints on the mock HTTP server.
    pub fn responses<'a>(&'a mut self) -> ResponseFixtures<'a> {
        ResponseFixtures { setup: self }
    }
}

pub struct ResponseFixtures<'a> {
    setup: &'a mut TestContext,
}
