//! Mock HTTP endpoints answering with fixture bodies.
//!
//! Endpoints are registered on the context's mockito server and verify they were called
//! the expected number of times once `Mock::assert` runs.

use mockito::Mock;

use crate::fixtures::{response::ResponseFixtures, Fixture};

impl<'a> ResponseFixtures<'a> {
    /// Create a mock endpoint answering with a fixture body.
    ///
    /// # Arguments
    /// - `method` - HTTP method to match, e.g. `"GET"`
    /// - `path` - Request path to match, e.g. `"/api/v2/users/1"`
    /// - `status` - Status code of the response
    /// - `fixture` - Fixture whose verbatim text becomes the JSON body
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint
    pub fn create_fixture_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        fixture: Fixture,
        expected_requests: usize,
    ) -> Mock {
        let body = self.setup.fixtures.get(fixture).to_string();

        self.setup
            .server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint answering with the generic `error_response` fixture.
    pub fn create_error_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.create_fixture_endpoint(
            method,
            path,
            status,
            Fixture::ErrorResponse,
            expected_requests,
        )
    }

    /// Create a token endpoint rejecting the request with the `access_token_error` fixture.
    ///
    /// Responds `401 Unauthorized` to `POST path`.
    pub fn create_token_error_endpoint(&mut self, path: &str, expected_requests: usize) -> Mock {
        self.create_fixture_endpoint(
            "POST",
            path,
            401,
            Fixture::AccessTokenError,
            expected_requests,
        )
    }
}
