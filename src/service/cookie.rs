use std::convert::TryFrom as _;
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, Seek as _, SeekFrom};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use cookie::Cookie as RawCookie;
use cookie_store::CookieStore;
use fs2::FileExt as _;
use reqwest::blocking::{Request, Response};
use reqwest::header::{HeaderValue, COOKIE, SET_COOKIE};

use crate::{Error, Result};

/// Issued by the site during the login handshake; never persisted.
static TRANSIENT_COOKIE_NAME: &str = "login_logout";

/// File-backed cookie jar, exclusively locked for the lifetime of the
/// invocation.
///
/// A missing, empty or corrupt file yields an empty store: "not logged in"
/// is a state, not an error. Disk writes only happen through `save` and
/// `clear`, so regular fetches never touch the file.
pub struct CookieStorage {
    path: PathBuf,
    file: File,
    store: CookieStore,
}

impl CookieStorage {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Could not create cookies dir")?;
        }
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path)
            .context("Could not open cookies file")?;
        file.try_lock_exclusive()
            .context("Could not lock cookies file")?;
        let reader = BufReader::new(&file);
        let store = CookieStore::load_json(reader).unwrap_or_default();
        Ok(Self {
            path: path.to_owned(),
            file,
            store,
        })
    }

    /// Presence of at least one unexpired cookie is the "logged in" signal.
    pub fn is_empty(&self) -> bool {
        self.store.iter_unexpired().next().is_none()
    }

    pub fn load_into(&self, request: &mut Request) -> Result<()> {
        let url = request.url().clone();
        let cookies = self
            .store
            .get_request_cookies(&url)
            .map(|cookie| cookie.encoded().to_string());
        for cookie in cookies {
            request
                .headers_mut()
                .append(COOKIE, HeaderValue::try_from(cookie)?);
        }
        Ok(())
    }

    /// Captures response cookies into the in-memory store only.
    pub fn store_from(&mut self, response: &Response) {
        let cookies = response.headers().get_all(SET_COOKIE).iter().filter_map(|val| {
            val.to_str()
                .ok()
                .and_then(|cookie_str| RawCookie::parse(cookie_str.to_owned()).ok())
        });
        self.store.store_response_cookies(cookies, response.url());
    }

    pub fn save(&mut self, domain: &str) -> Result<()> {
        self.store.remove(domain, "/", TRANSIENT_COOKIE_NAME);
        self.file.seek(SeekFrom::Start(0))?;
        self.file.set_len(0)?;
        self.store
            .save_json(&mut self.file)
            .map_err(Error::msg)
            .context("Could not save cookies to json file")
    }

    #[cfg(test)]
    pub fn insert_for_test(&mut self, cookie_str: &str, url: &reqwest::Url) {
        let cookie = RawCookie::parse(cookie_str.to_owned()).unwrap();
        self.store.insert_raw(&cookie, url).unwrap();
    }

    pub fn clear(&mut self) -> Result<()> {
        self.store = CookieStore::default();
        self.file.set_len(0)?;
        fs::remove_file(&self.path).context("Could not delete cookies file")
    }
}

impl Drop for CookieStorage {
    fn drop(&mut self) {
        self.file.unlock().ok();
    }
}
