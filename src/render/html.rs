use reqwest::Url;

/// HTML 텍스트/속성 이스케이프
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
    Warning,
    Info,
}

impl AlertKind {
    pub fn class(self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Danger => "danger",
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
        }
    }
}

// region:    --- Links
fn local_url(path: &str) -> Option<Url> {
    Url::parse("http://localhost/").ok()?.join(path).ok()
}

/// 상세 페이지 주소. id 는 쿼리 값으로 인코딩한다
pub fn detail_href(id: &str) -> String {
    let query = local_url("listing")
        .map(|mut url| {
            url.query_pairs_mut().append_pair("id", id);
            url.query().unwrap_or_default().to_string()
        })
        .unwrap_or_default();
    format!("listing?{query}")
}

/// `/listings/{id}/{action}` 폼 주소. id 는 경로 조각 하나로 인코딩한다
pub fn listing_action(id: &str, action: &str) -> String {
    local_url("/")
        .and_then(|mut url| {
            url.path_segments_mut()
                .ok()?
                .pop_if_empty()
                .extend(["listings", id, action]);
            Some(url.path().to_string())
        })
        .unwrap_or_default()
}
// endregion: --- Links

/// 닫을 수 있는 알림
pub fn alert_html(kind: AlertKind, message: &str) -> String {
    format!(
        r#"<div class="alert alert-{} alert-dismissible mt-3" role="alert">{}<button type="button" class="btn-close" data-bs-dismiss="alert" aria-label="Close"></button></div>"#,
        kind.class(),
        escape(message)
    )
}

/// 기본 페이지 틀
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

/// 로그인 상태에 따른 상단 메뉴
pub fn nav_html(logged_in: bool) -> String {
    let links = if logged_in {
        r#"<a id="myPage-button" href="/profile">My Page</a>
  <a href="/listings/new">New Listing</a>
  <form method="post" action="/logout"><button id="logout-button" type="submit">Log out</button></form>"#
    } else {
        r#"<a id="login-button" href="/login">Log in</a>"#
    };
    format!("<nav>\n  <a href=\"/\">Listings</a>\n  {links}\n</nav>")
}

/// 검색창 + 정렬 버튼
pub fn search_bar_html(query: &str, tag: Option<&str>) -> String {
    // 태그 필터는 검색/정렬 후에도 유지
    let tag = tag
        .map(|tag| format!(r#"<input type="hidden" name="tag" value="{}">"#, escape(tag)))
        .unwrap_or_default();
    format!(
        r#"<form method="get" action="/" class="search">
  {tag}
  <input id="search-input" name="q" value="{}">
  <button id="search-button" type="submit">Search</button>
  <button name="sort" value="created" id="SortByDateButton">Newest</button>
  <button name="sort" value="updated" id="SortByUpdatedButton">Recently updated</button>
  <button name="sort" value="highest_bid" id="HighestBidButton">Highest bid</button>
  <button name="sort" value="lowest_bid" id="LowestBidButton">Lowest bid</button>
  <button name="sort" value="ends_at" id="SortByEndsAtButton">Ending soon</button>
</form>"#,
        escape(query)
    )
}

pub const LOGIN_FORMS: &str = r#"<form id="loginForm" method="post" action="/login">
  <input id="email" name="email" type="email">
  <input id="password" name="password" type="password">
  <button type="submit">Log in</button>
</form>
<form id="registerForm" method="post" action="/register">
  <input id="username" name="username">
  <input name="email" type="email">
  <input name="password" type="password">
  <button type="submit">Register</button>
</form>"#;

pub const CREATE_LISTING_FORM: &str = r#"<form id="create-listing-form" method="post" action="/listings">
  <input id="title" name="title">
  <input id="mediaUrl" name="media_url">
  <textarea id="description" name="description"></textarea>
  <input id="tags" name="tags">
  <input id="endsAt" name="ends_at" type="datetime-local">
  <button type="submit">Create</button>
</form>"#;
