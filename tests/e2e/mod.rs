//! End-to-end test utilities and shared fixtures

use insurance_quote::ServerBuilder;

use tokio::task::JoinHandle;

/// Test server instance bound to an ephemeral port
pub struct TestServer {
    pub base_url: String,
    pub handle: JoinHandle<()>,
}

impl TestServer {
    /// Spawn a test server with default settings
    pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
        let (app, _state) = ServerBuilder::new().build();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}:{}", addr.ip(), addr.port());

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        // Give server time to start
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Ok(Self { base_url, handle })
    }

    pub fn abort(self) {
        self.handle.abort();
    }
}
