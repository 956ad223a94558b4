pub fn load_api_url() -> Option<String> {
    bloglist_common::load_persistent_api_url()
}

pub fn save_api_url(url: &str) -> anyhow::Result<()> {
    bloglist_common::save_persistent_api_url(url)
}

/// `--api-url`, then `BLOGLIST_API_URL`, then the saved URL, then the default.
pub fn resolve_api_url(explicit: Option<&str>) -> String {
    bloglist_common::resolve_api_url(explicit)
}
