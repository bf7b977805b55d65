use gallery_core::{decode_page, Config, FetchError, FilterState, GalleryPage, GalleryRequest, GallerySource};
use gloo_net::http::Request;

/// Data source backed by the browser's fetch API.
#[derive(Clone, PartialEq)]
pub struct HttpGallerySource {
    config: Config,
}

impl HttpGallerySource {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn request(&self, filter: &FilterState) -> Result<Request, FetchError> {
        let request = GalleryRequest::for_filter(&self.config, filter);
        log::debug!("GET {}", request.url);

        let mut builder = Request::get(&request.url);
        if let Some(authorization) = &request.authorization {
            builder = builder.header("Authorization", authorization);
        }

        builder.build().map_err(|err| FetchError::Network(err.to_string()))
    }
}

impl GallerySource for HttpGallerySource {
    async fn fetch_page(&self, filter: &FilterState) -> Result<GalleryPage, FetchError> {
        let response = self
            .request(filter)?
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;
        let body = response
            .text()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        decode_page(&body)
    }
}
