//! Fragment retrieval over HTTP.
//!
//! [`FragmentSource`] fetches the base config template and named `.bh`
//! fragment files from the configured upstream, translating transport
//! failures and non-success statuses into typed errors. The merge engine
//! only ever sees successfully retrieved text.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument};

use filterforge_shared::{AppConfig, FilterBlock, FilterForgeError, Result, RuneDesign, SourcesConfig};

/// HTTP client for the base template and fragment files.
pub struct FragmentSource {
    client: Client,
    sources: SourcesConfig,
}

impl FragmentSource {
    /// Build a source from application config.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.fetch.user_agent)
            .redirect(reqwest::redirect::Policy::limited(5))
            .timeout(Duration::from_secs(config.fetch.timeout_secs))
            .build()
            .map_err(|e| {
                FilterForgeError::Network(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            sources: config.sources.clone(),
        })
    }

    /// Fetch the base config template.
    #[instrument(skip(self))]
    pub async fn fetch_base(&self) -> Result<String> {
        self.fetch_text(&self.sources.base_url, "base file").await
    }

    /// Fetch the rune design block for the given variant.
    #[instrument(skip(self), fields(design = %design))]
    pub async fn fetch_rune_design(&self, design: RuneDesign) -> Result<String> {
        let file = design.file_name();
        self.fetch_text(&self.block_url(&file), &file).await
    }

    /// Fetch a single filter block file.
    #[instrument(skip(self), fields(block = %block))]
    pub async fn fetch_filter_block(&self, block: FilterBlock) -> Result<String> {
        let file = block.file_name();
        self.fetch_text(&self.block_url(&file), &file).await
    }

    /// Fetch filter block files sequentially, in request order.
    ///
    /// Order matters: the merge engine concatenates fragments in the order
    /// they were requested.
    pub async fn fetch_filter_blocks(&self, blocks: &[FilterBlock]) -> Result<Vec<String>> {
        let mut texts = Vec::with_capacity(blocks.len());
        for &block in blocks {
            texts.push(self.fetch_filter_block(block).await?);
        }
        Ok(texts)
    }

    fn block_url(&self, file_name: &str) -> String {
        format!(
            "{}/{file_name}",
            self.sources.blocks_base_url.trim_end_matches('/')
        )
    }

    /// Fetch a URL as text, mapping transport and status failures.
    async fn fetch_text(&self, url: &str, name: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FilterForgeError::Network(format!("request for {name} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FilterForgeError::Fetch {
                name: name.to_string(),
                status: status.as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| FilterForgeError::Network(format!("reading {name} failed: {e}")))?;

        debug!(name, len = text.len(), "fetched fragment");
        Ok(text)
    }
}
