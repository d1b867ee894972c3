use std::collections::HashMap;

use anyhow::Context as _;
use reqwest::blocking::{multipart, Client, RequestBuilder, Response};
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use reqwest::Url;

use crate::config::Config;
use crate::service::CookieStorage;
use crate::{Error, Result};

pub static INTERNET_DOWN_MSG: &str = "Nothing to show. Check your internet connection.";

static REDIRECT_LIMIT: usize = 10;

/// One blocking HTTP session: a configured client plus the locked cookie jar.
///
/// Redirects are handled manually so response cookies are captured at every
/// hop and the final URL stays observable for callers. Cookies are loaded
/// into every outgoing request and captured back into the in-memory store;
/// the jar file itself is only written by `save_cookies` / `clear_cookies`
/// (login and logout).
pub struct Session {
    client: Client,
    storage: CookieStorage,
    base_url: Url,
}

impl Session {
    pub fn open(conf: &Config) -> Result<Self> {
        let client = Client::builder()
            .referer(false)
            .redirect(Policy::none()) // redirects manually
            .user_agent(conf.session().user_agent().as_str())
            .timeout(Some(conf.session().timeout()))
            .build()
            .context("Could not build http client")?;
        let storage = CookieStorage::open(conf.session().cookies_path())?;
        let base_url = Url::parse(conf.base_url()).context("Could not parse base url")?;
        Ok(Self {
            client,
            storage,
            base_url,
        })
    }

    pub fn is_logged_in(&self) -> bool {
        !self.storage.is_empty()
    }

    pub fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Could not parse url path : {}", path))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn get(&mut self, path: &str) -> Result<Response> {
        let url = self.url(path)?;
        let req = self.client.get(url);
        self.send(req)
    }

    pub fn get_with_query(&mut self, path: &str, query: &[(&str, String)]) -> Result<Response> {
        let url = self.url(path)?;
        let req = self.client.get(url).query(query);
        self.send(req)
    }

    pub fn post_form(
        &mut self,
        path: &str,
        payload: &HashMap<&str, String>,
        csrf_token: Option<&str>,
    ) -> Result<Response> {
        let url = self.url(path)?;
        let mut req = self.client.post(url).form(payload);
        if let Some(token) = csrf_token {
            req = req.header("X-CSRF-Token", token);
        }
        self.send(req)
    }

    pub fn post_multipart(&mut self, path: &str, form: multipart::Form) -> Result<Response> {
        let url = self.url(path)?;
        let req = self.client.post(url).multipart(form);
        self.send(req)
    }

    pub fn save_cookies(&mut self) -> Result<()> {
        let domain = self.base_url.host_str().unwrap_or_default().to_owned();
        self.storage.save(&domain)
    }

    pub fn clear_cookies(&mut self) -> Result<()> {
        self.storage.clear()
    }

    fn send(&mut self, req: RequestBuilder) -> Result<Response> {
        let mut request = req.build().context("Could not build request")?;
        for _ in 0..REDIRECT_LIMIT {
            self.storage
                .load_into(&mut request)
                .context("Could not load cookies into request")?;
            let response = self.client.execute(request).map_err(|err| {
                if err.is_timeout() || err.is_connect() {
                    Error::msg(INTERNET_DOWN_MSG)
                } else {
                    Error::new(err).context("Could not send request")
                }
            })?;
            self.storage.store_from(&response);

            let location = if response.status().is_redirection() {
                response
                    .headers()
                    .get(LOCATION)
                    .and_then(|val| val.to_str().ok())
                    .map(str::to_owned)
            } else {
                None
            };
            match location {
                Some(location) => {
                    let next_url = response
                        .url()
                        .join(&location)
                        .context("Could not resolve redirect location")?;
                    request = self.client.get(next_url).build()?;
                }
                None => return Ok(response),
            }
        }
        Err(Error::msg("Stopped after too many redirects"))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn url_joins_against_base() -> Result<()> {
        let dir = tempdir()?;
        let conf = Config::test_with_cookies_path(dir.path().join("cookies.json"));
        let session = Session::open(&conf)?;
        assert_eq!(
            session.url("/problems/WEICOM")?.as_str(),
            "https://www.codechef.com/problems/WEICOM"
        );
        Ok(())
    }

    #[test]
    fn fresh_jar_is_anonymous() -> Result<()> {
        let dir = tempdir()?;
        let conf = Config::test_with_cookies_path(dir.path().join("cookies.json"));
        let session = Session::open(&conf)?;
        assert!(!session.is_logged_in());
        Ok(())
    }
}
