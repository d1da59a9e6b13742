// src/fetch.rs
//! Draw-result fetcher: round → URL → bytes → EUC-KR text → `DrawResult`.
//!
//! One GET per round, no retries, no caching. Dropping a pending `fetch`
//! future abandons it without side effects.

use std::collections::BTreeMap;

use reqwest::{Client, Url};
use tokio::task::JoinSet;

use crate::config::consts::ROUND_PLACEHOLDER;
use crate::config::options::{AppOptions, ParseOptions};
use crate::core::{charset, net};
use crate::error::FetchError;
use crate::lotto::DrawResult;
use crate::progress::Progress;
use crate::specs::draw_result;

#[derive(Clone, Debug)]
pub struct DrawClient {
    http: Client,
    url_template: String,
    parse: ParseOptions,
}

impl DrawClient {
    pub fn new(opts: &AppOptions) -> Result<Self, FetchError> {
        Ok(Self {
            http: net::build_client(&opts.fetch)?,
            url_template: opts.fetch.url_template.clone(),
            parse: opts.parse.clone(),
        })
    }

    /// Results page URL for `round`.
    pub fn request_url(&self, round: u32) -> Result<Url, FetchError> {
        let invalid = |reason: String| FetchError::InvalidRequest { round, reason };

        if round == 0 {
            return Err(invalid(s!("rounds start at 1")));
        }
        if !self.url_template.contains(ROUND_PLACEHOLDER) {
            return Err(invalid(format!(
                "URL template {:?} has no {ROUND_PLACEHOLDER} placeholder",
                self.url_template
            )));
        }
        let raw = self.url_template.replace(ROUND_PLACEHOLDER, &round.to_string());
        Url::parse(&raw).map_err(|e| invalid(format!("{raw:?}: {e}")))
    }

    /// Fetch and parse one round. The first failing step is reported.
    pub async fn fetch(&self, round: u32) -> Result<DrawResult, FetchError> {
        let url = self.request_url(round)?;
        logd!("Fetch: round {round}: GET {url}");

        let bytes = net::http_get_bytes(&self.http, url).await?;
        logd!("Fetch: round {round}: {} bytes", bytes.len());

        let doc = charset::decode_euc_kr(&bytes).ok_or(FetchError::DecodingFailed { round })?;

        let draw = draw_result::parse_doc_with(&doc, &self.parse)
            .ok_or(FetchError::ParsingFailed { round })?;

        if draw.round != round {
            // The site answers out-of-range rounds with the latest draw.
            logf!("Fetch: asked for round {round}, page shows round {}", draw.round);
        }
        logf!("Fetch: round {} parsed ({})", draw.round, draw.draw_date);
        Ok(draw)
    }

    /// Fetch several rounds concurrently. Duplicates are fetched once.
    /// Results are keyed by the requested round; completion order is arbitrary.
    pub async fn fetch_many(
        &self,
        rounds: &[u32],
        mut progress: Option<&mut (dyn Progress + Send)>,
    ) -> BTreeMap<u32, Result<DrawResult, FetchError>> {
        let mut wanted = rounds.to_vec();
        wanted.sort_unstable();
        wanted.dedup();

        if let Some(p) = progress.as_deref_mut() {
            p.begin(wanted.len());
            p.log(&format!("Fetching {} round(s)", wanted.len()));
        }

        let mut set = JoinSet::new();
        for &round in &wanted {
            let client = self.clone();
            set.spawn(async move { (round, client.fetch(round).await) });
        }

        let mut out = BTreeMap::new();
        while let Some(joined) = set.join_next().await {
            let (round, res) = match joined {
                Ok(pair) => pair,
                Err(e) => {
                    loge!("Fetch: task failed: {e}");
                    continue;
                }
            };
            if let Some(p) = progress.as_deref_mut() {
                match &res {
                    Ok(_) => p.item_done(round),
                    Err(e) => p.item_failed(round, &e.user_message()),
                }
            }
            out.insert(round, res);
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        out
    }
}
