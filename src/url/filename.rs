use url::Url;

/// Derives the report filename from the validated target URL
///
/// The name is the host plus any explicit non-default port, with `.txt`
/// appended. Scheme, path, query and fragment never reach the filename.
///
/// # Examples
///
/// ```
/// use seo_checker::url::report_filename;
/// use url::Url;
///
/// let url = Url::parse("https://site.example/about").unwrap();
/// assert_eq!(report_filename(&url), "site.example.txt");
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(report_filename(&url), "127.0.0.1:8080.txt");
/// ```
pub fn report_filename(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();

    match url.port() {
        Some(port) => format!("{}:{}.txt", host, port),
        None => format!("{}.txt", host),
    }
}
