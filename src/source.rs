/// One page returned by a [`PageSource`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Token for the following page; `None` on the last page.
    pub next_page_token: Option<String>,
    /// Total number of items behind all pages, when the upstream reports it.
    pub total_count: Option<usize>,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("upstream returned status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("failed to decode page: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The remote paginated listing.
pub trait PageSource<T> {
    /// Fetches the page behind `page_token` (`None` for the first page).
    fn fetch_page(&mut self, page_token: Option<&str>) -> Result<Page<T>, FetchError>;
}

impl<T, F> PageSource<T> for F
where
    F: FnMut(Option<&str>) -> Result<Page<T>, FetchError>,
{
    fn fetch_page(&mut self, page_token: Option<&str>) -> Result<Page<T>, FetchError> {
        self(page_token)
    }
}

/// Cursor bookkeeping over a [`PageSource`].
///
/// The feed hands fetched items to its caller (who appends them to the deck) and remembers
/// where to continue. There is no retry: a failed fetch leaves the cursor where it was.
#[derive(Debug)]
pub struct PagedFeed<S> {
    source: S,
    next_page_token: Option<String>,
    total_count: Option<usize>,
    pages_loaded: usize,
    items_loaded: usize,
}

impl<S> PagedFeed<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            next_page_token: None,
            total_count: None,
            pages_loaded: 0,
            items_loaded: 0,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Whether another page exists upstream. True until a page without a next token arrives.
    pub fn has_more(&self) -> bool {
        self.pages_loaded == 0 || self.next_page_token.is_some()
    }

    /// Total reported by the first page.
    pub fn total_count(&self) -> Option<usize> {
        self.total_count
    }

    pub fn pages_loaded(&self) -> usize {
        self.pages_loaded
    }

    pub fn items_loaded(&self) -> usize {
        self.items_loaded
    }

    /// Fetches the next page and returns its items. Returns an empty batch once exhausted.
    pub fn load_more<T>(&mut self) -> Result<Vec<T>, FetchError>
    where
        S: PageSource<T>,
    {
        if !self.has_more() {
            return Ok(Vec::new());
        }

        let page = self.source.fetch_page(self.next_page_token.as_deref())?;
        if self.pages_loaded == 0 {
            self.total_count = page.total_count;
        }
        self.next_page_token = page.next_page_token;
        self.pages_loaded += 1;
        self.items_loaded += page.items.len();
        tracing::debug!(
            page = self.pages_loaded,
            items = page.items.len(),
            has_more = self.has_more(),
            total = ?self.total_count,
            "loaded page"
        );
        Ok(page.items)
    }
}
