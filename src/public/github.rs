use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static GITHUB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://github\.com/([^/]+)/([^/#@]+)").expect("valid github repo regex")
});

/// Pull the `(org, repo)` pair out of a plugin's PyPI info record.
///
/// The well-known URL fields are checked first, then every value of
/// `project_urls`; the first GitHub URL wins. A trailing `.git` on the repo
/// segment is stripped.
#[allow(dead_code)] // Local data access beyond the listing page.
pub fn github_org_repo(pypi_info: &Value) -> Option<(String, String)> {
    let info = pypi_info.get("info")?;

    let direct = ["home_page", "package_url", "project_url"]
        .into_iter()
        .filter_map(|field| info.get(field));
    let project_urls = info
        .get("project_urls")
        .and_then(Value::as_object)
        .into_iter()
        .flat_map(|urls| urls.values());

    for link in direct.chain(project_urls) {
        let Some(link) = link.as_str() else { continue };
        if let Some(caps) = GITHUB_RE.captures(link) {
            let org = caps[1].to_string();
            let repo = caps[2].strip_suffix(".git").unwrap_or(&caps[2]).to_string();
            return Some((org, repo));
        }
    }

    None
}
