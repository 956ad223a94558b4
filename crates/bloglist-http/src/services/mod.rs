//! Endpoint-level services over [`crate::ApiClient`].

mod blogs;
mod login;

pub use blogs::BlogService;
pub use login::LoginService;

#[cfg(test)]
pub(crate) mod testing {
    use crate::error::Result;
    use crate::traits::ApiNetwork;
    use crate::types::{ApiRequest, ApiResponse};
    use crate::{ApiClient, ClientConfig};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::sync::Arc;

    /// Replays canned responses and records what was sent.
    #[derive(Default)]
    pub struct RecordingNetwork {
        pub sent: Mutex<Vec<(String, ApiRequest)>>,
        pub replies: Mutex<VecDeque<ApiResponse>>,
    }

    impl RecordingNetwork {
        pub fn reply(&self, response: ApiResponse) {
            self.replies.lock().push_back(response);
        }

        pub fn last(&self) -> (String, ApiRequest) {
            self.sent.lock().last().cloned().expect("no request sent")
        }
    }

    #[async_trait]
    impl ApiNetwork for RecordingNetwork {
        async fn fetch(&self, url: &str, req: ApiRequest) -> Result<ApiResponse> {
            self.sent.lock().push((url.to_string(), req));
            Ok(self
                .replies
                .lock()
                .pop_front()
                .unwrap_or_else(|| ApiResponse::new(500, "no reply queued")))
        }
    }

    pub fn client() -> (ApiClient, Arc<RecordingNetwork>) {
        let network = Arc::new(RecordingNetwork::default());
        let client = ApiClient::with_network(
            ClientConfig::with_base_url("http://blogs.test"),
            network.clone(),
        );
        (client, network)
    }
}
