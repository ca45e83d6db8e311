use mockito::{Mock, Server, ServerGuard};

use crate::{constant::TEST_ID_TOKEN, error::TestError};

/// Mock backend and identity provider for one test.
///
/// Both services are served by the same mockito server; the backend lives at the server root
/// and the identity provider under [`TestSetup::IDENTITY_PREFIX`].
pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub const IDENTITY_PREFIX: &'static str = "/identity/v1";

    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        Ok(Self {
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock backend.
    pub fn api_url(&self) -> String {
        self.server.url()
    }

    /// Base URL of the mock identity provider.
    pub fn identity_url(&self) -> String {
        format!("{}{}", self.server.url(), Self::IDENTITY_PREFIX)
    }

    /// Bearer header value sent by signed in clients.
    pub fn bearer() -> String {
        format!("Bearer {}", TEST_ID_TOKEN)
    }

    /// Keep a mock alive until [`TestSetup::assert_mocks`] runs.
    pub fn register(&mut self, mock: Mock) {
        self.mocks.push(mock);
    }

    /// Assert all mock endpoints were called as expected.
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
