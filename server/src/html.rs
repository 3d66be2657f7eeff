pub const UPLOAD_FORM: &str = r#"<!doctype html>
<html>
<head><title>textdex</title></head>
<body>
<h1>Upload a corpus</h1>
<form action="/success" method="post" enctype="multipart/form-data">
<p><input type="file" name="file1"></p>
<p><input type="text" name="searchterm" placeholder="search term"></p>
<p><input type="submit" value="Search"></p>
</form>
</body>
</html>
"#;

pub fn render_results(query: &str, results: &[String]) -> String {
    let mut body = String::new();
    body.push_str("<!doctype html>\n<html>\n<head><title>textdex results</title></head>\n<body>\n");
    body.push_str(&format!("<h1>Results for \"{}\"</h1>\n", escape(query)));
    if results.is_empty() {
        body.push_str("<p>No matches.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for r in results {
            body.push_str(&format!("<li><pre>{}</pre></li>\n", escape(r)));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("<p><a href=\"/\">Search again</a></p>\n</body>\n</html>\n");
    body
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
