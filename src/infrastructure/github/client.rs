//! GitHub Gists REST client
//!
//! Blocking client implementing the `GistApi` port. Credentials are fixed at
//! construction; nothing is mutated afterwards.

use std::collections::BTreeMap;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use url::Url;

use crate::config::ApiSettings;
use crate::domain::ports::{GistApi, GistError, GistFile, GistRef, GistResult, RemoteGist};

const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
const PAGE_SIZE: usize = 100;

/// Gist API client for api.github.com (or a compatible base URL)
pub struct GithubGistClient {
    http: Client,
    base_url: Url,
    token: String,
}

impl GithubGistClient {
    pub fn new(settings: &ApiSettings) -> GistResult<Self> {
        let mut base = settings.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).map_err(|e| GistError::Url(e.to_string()))?;
        let http = Client::builder().build().map_err(transport)?;

        Ok(Self {
            http,
            base_url,
            token: settings.token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> GistResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| GistError::Url(e.to_string()))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, ACCEPT_HEADER)
            .header(
                USER_AGENT,
                concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
            )
    }

    fn send<T: serde::de::DeserializeOwned>(&self, request: RequestBuilder) -> GistResult<T> {
        let response = self.authorized(request).send().map_err(transport)?;
        Self::handle_response(response)
    }

    fn handle_response<T: serde::de::DeserializeOwned>(response: Response) -> GistResult<T> {
        let status = response.status();
        trace!(%status, url = %response.url(), "gist api response");
        if status.is_success() {
            response.json::<T>().map_err(transport)
        } else {
            let body = response.text().unwrap_or_default();
            Err(GistError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }

    fn list_page(&self, page: usize) -> GistResult<Vec<ApiGist>> {
        let mut url = self.endpoint("gists")?;
        url.query_pairs_mut()
            .append_pair("per_page", &PAGE_SIZE.to_string())
            .append_pair("page", &page.to_string());
        debug!(page, "listing gists");
        self.send(self.http.get(url))
    }
}

fn transport(err: reqwest::Error) -> GistError {
    GistError::Transport {
        message: err.to_string(),
    }
}

impl GistApi for GithubGistClient {
    fn list(&self) -> GistResult<Vec<RemoteGist>> {
        let mut gists = Vec::new();
        let mut page = 1;
        loop {
            let batch = self.list_page(page)?;
            let done = batch.len() < PAGE_SIZE;
            gists.extend(batch.into_iter().map(ApiGist::into_remote));
            if done {
                break;
            }
            page += 1;
        }
        Ok(gists)
    }

    fn create(&self, file_name: &str, content: &str) -> GistResult<GistRef> {
        let url = self.endpoint("gists")?;
        debug!(file = file_name, "creating gist");
        let payload = GistPayload::new(file_name, content);
        let gist: ApiGist = self.send(self.http.post(url).json(&payload))?;
        Ok(gist.into_ref())
    }

    fn update(&self, id: &str, file_name: &str, content: &str) -> GistResult<GistRef> {
        let url = self.endpoint(&format!("gists/{id}"))?;
        debug!(file = file_name, gist_id = id, "updating gist");
        let payload = GistPayload::new(file_name, content);
        let gist: ApiGist = self.send(self.http.patch(url).json(&payload))?;
        Ok(gist.into_ref())
    }

    fn get(&self, id: &str) -> GistResult<GistFile> {
        let url = self.endpoint(&format!("gists/{id}"))?;
        debug!(gist_id = id, "fetching gist");
        let gist: ApiGist = self.send(self.http.get(url))?;
        gist.into_file()
    }
}

/// Request body for create and update
#[derive(Debug, Serialize)]
struct GistPayload<'a> {
    description: String,
    public: bool,
    files: BTreeMap<&'a str, FilePayload<'a>>,
}

#[derive(Debug, Serialize)]
struct FilePayload<'a> {
    content: &'a str,
}

impl<'a> GistPayload<'a> {
    fn new(file_name: &'a str, content: &'a str) -> Self {
        let mut files = BTreeMap::new();
        files.insert(file_name, FilePayload { content });
        Self {
            description: format!("Auto-synced gist for {file_name}"),
            public: false,
            files,
        }
    }
}

/// Gist as returned by the API (only the fields we use)
#[derive(Debug, Deserialize)]
struct ApiGist {
    id: String,
    html_url: String,
    #[serde(default)]
    public: bool,
    #[serde(default)]
    files: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ApiFile {
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

impl ApiGist {
    fn into_remote(self) -> RemoteGist {
        RemoteGist {
            id: self.id,
            public: self.public,
            url: self.html_url,
            files: self.files.keys().cloned().collect(),
        }
    }

    fn into_ref(self) -> GistRef {
        GistRef {
            id: self.id,
            url: self.html_url,
        }
    }

    fn into_file(self) -> GistResult<GistFile> {
        let mut files = self.files.into_iter();
        let (key, value) = match (files.next(), files.next()) {
            (Some(only), None) => only,
            (None, _) => return Err(GistError::Empty { id: self.id }),
            (Some(_), Some(_)) => {
                return Err(GistError::MultiFile {
                    count: 2 + files.count(),
                    id: self.id,
                })
            }
        };

        let file: ApiFile = serde_json::from_value(value).map_err(|e| GistError::Transport {
            message: format!("malformed file entry in gist {}: {e}", self.id),
        })?;

        Ok(GistFile {
            id: self.id,
            url: self.html_url,
            file_name: file.filename.unwrap_or(key),
            content: file.content.unwrap_or_default(),
        })
    }
}
