use crate::decode::decode_products;
use crate::traits::ProductSource;
use crate::{Error, Result};
use shopcat_types::Product;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Public demo catalog the browser talks to unless configured otherwise
pub const DEFAULT_API_URL: &str = "https://fakestoreapi.com/products";

/// Primary source: one GET against the catalog endpoint, no query
/// parameters, no auth.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    /// `timeout` of `None` waits for the server indefinitely
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ProductSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> impl Future<Output = Result<Vec<Product>>> + Send {
        async move {
            debug!(url = %self.url, "requesting product list");

            let response = self.client.get(&self.url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(Error::Status {
                    url: self.url.clone(),
                    status: status.as_u16(),
                });
            }

            let body = response.bytes().await?;
            let products = decode_products(&body)?;
            debug!(url = %self.url, count = products.len(), "product list received");
            Ok(products)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve exactly one canned HTTP response on a loopback port
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        format!("http://{}/products", addr)
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            r#"[{"id": 1, "title": "Red Shoe", "price": 10, "category": "shoes"}]"#,
        );
        let source = HttpSource::new(url, Some(Duration::from_secs(5))).unwrap();

        let products = source.fetch().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "Red Shoe");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let url = serve_once("HTTP/1.1 503 Service Unavailable", "[]");
        let source = HttpSource::new(url, Some(Duration::from_secs(5))).unwrap();

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, Error::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpSource::new(
            format!("http://{}/products", addr),
            Some(Duration::from_secs(5)),
        )
        .unwrap();

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }
}
