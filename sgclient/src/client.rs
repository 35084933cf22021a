//! Client trait for the remote scrape service and the factory used to build
//! credential-bound clients.

use std::sync::Arc;

use crate::{ApiKey, ClientError, ClientRequest, JsonMap};

/// Structured mapping returned by every service operation.
pub type ClientResponse = JsonMap;

/// Blocking client for the remote extraction service.
///
/// One call performs exactly one service operation. Transport, retries and
/// authentication live behind this trait.
pub trait ScrapeClient: Send + Sync + std::fmt::Debug {
    fn execute(&self, request: ClientRequest) -> Result<ClientResponse, ClientError>;
}

/// Builds a client bound to a resolved credential.
pub trait ClientFactory: Send + Sync {
    fn build(&self, api_key: &ApiKey) -> Result<Arc<dyn ScrapeClient>, ClientError>;
}

impl<F> ClientFactory for F
where
    F: Fn(&ApiKey) -> Result<Arc<dyn ScrapeClient>, ClientError> + Send + Sync,
{
    fn build(&self, api_key: &ApiKey) -> Result<Arc<dyn ScrapeClient>, ClientError> {
        self(api_key)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Default)]
    struct KeyEchoClient {
        key: String,
        calls: Mutex<u32>,
    }

    impl ScrapeClient for KeyEchoClient {
        fn execute(&self, request: ClientRequest) -> Result<ClientResponse, ClientError> {
            *self.calls.lock().expect("calls lock") += 1;
            let mut response = ClientResponse::new();
            response.insert("operation".to_string(), request.operation().as_str().into());
            response.insert("key".to_string(), self.key.clone().into());
            Ok(response)
        }
    }

    #[test]
    fn closures_act_as_factories() {
        let factory = |api_key: &ApiKey| -> Result<Arc<dyn ScrapeClient>, ClientError> {
            Ok(Arc::new(KeyEchoClient {
                key: api_key.expose().to_string(),
                calls: Mutex::new(0),
            }))
        };

        let key = ApiKey::new("sgai-factory").expect("key should be valid");
        let client = factory.build(&key).expect("factory should build");
        let response = client
            .execute(ClientRequest::GetCredits)
            .expect("call should succeed");

        assert_eq!(response["operation"], "get_credits");
        assert_eq!(response["key"], "sgai-factory");
    }

    #[test]
    fn factory_errors_are_returned_unchanged() {
        let factory = |_: &ApiKey| -> Result<Arc<dyn ScrapeClient>, ClientError> {
            Err(ClientError::authentication("key revoked"))
        };

        let key = ApiKey::new("sgai-revoked").expect("key should be valid");
        let error = factory.build(&key).expect_err("factory should fail");
        assert_eq!(error, ClientError::authentication("key revoked"));
    }
}
