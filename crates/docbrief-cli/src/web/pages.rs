//! Server-rendered HTML for the upload form and the summary view.

pub const PAGE_TITLE: &str = "Company Document Analyzer";
pub const UNSUPPORTED_MESSAGE: &str = "Unsupported file type.";
pub const NO_TEXT_MESSAGE: &str = "No text could be extracted from this document.";
pub const MISSING_FILE_MESSAGE: &str = "No file provided.";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; color: #1f2933; }
h1 { font-size: 1.8rem; }
form.upload { border: 1px dashed #9aa5b1; border-radius: 8px; padding: 1.5rem; }
.error { background: #fde8e8; color: #9b1c1c; border-radius: 6px; padding: 0.75rem 1rem; margin: 1rem 0; }
.fault { background: #fff4e5; color: #8a4b08; border-radius: 6px; padding: 0.75rem 1rem; white-space: pre-wrap; }
textarea { width: 100%; height: 300px; font: inherit; }
button { margin-top: 0.75rem; padding: 0.5rem 1rem; }
#busy { display: none; align-items: center; gap: 0.75rem; margin-top: 1rem; }
#busy.active { display: flex; }
.spinner { width: 1.2rem; height: 1.2rem; border: 3px solid #cbd2d9; border-top-color: #3e4c59; border-radius: 50%; animation: spin 0.8s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
"#;

const UPLOAD_FORM: &str = r#"<form class="upload" method="post" action="/summarize" enctype="multipart/form-data"
      onsubmit="document.getElementById('busy').classList.add('active'); this.querySelector('button').disabled = true;">
  <label for="file">Upload a company document (PDF or DOCX)</label><br>
  <input type="file" id="file" name="file" accept=".pdf,.docx" required>
  <br><button type="submit">Analyze</button>
  <div id="busy"><div class="spinner"></div><span>Processing document...</span></div>
</form>"#;

fn layout(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<h1>📊 {title}</h1>
{body}
</body>
</html>"#,
        title = PAGE_TITLE,
    )
}

/// Upload page, optionally with an inline error above the form.
pub fn upload_page(error: Option<&str>) -> String {
    let error_html = error
        .map(|msg| format!(r#"<div class="error" role="alert">{}</div>"#, escape_html(msg)))
        .unwrap_or_default();
    layout(&format!("{error_html}\n{UPLOAD_FORM}"))
}

/// Summary view: read-only text box plus the download button.
///
/// The text box is part of the download form, so the summary travels back
/// to `/download` without any server-side session.
pub fn summary_page(summary: &str) -> String {
    // A newline right after <textarea> is swallowed by the HTML parser, so one
    // is emitted to protect summaries that start with a blank line.
    layout(&format!(
        r#"{UPLOAD_FORM}
<h2>📝 Summary</h2>
<form method="post" action="/download">
  <label for="summary">Generated Summary</label>
  <textarea id="summary" name="summary" readonly>
{summary}</textarea>
  <button type="submit" id="download">📥 Download Summary as Word Document</button>
</form>"#,
        summary = escape_html(summary),
    ))
}

/// Page shown when the pipeline fails after the type check.
pub fn fault_page(message: &str) -> String {
    layout(&format!(
        r#"<div class="fault" role="alert"><strong>Processing failed</strong>
{}</div>
<p><a href="/">Try another document</a></p>"#,
        escape_html(message)
    ))
}

pub fn escape_html(s: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"R&D"</b> 'x'"#),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt; &#39;x&#39;"
        );
    }

    #[test]
    fn upload_page_has_no_download_button() {
        let html = upload_page(None);
        assert!(html.contains(PAGE_TITLE));
        assert!(html.contains(r#"name="file""#));
        assert!(!html.contains(r#"id="download""#));
        assert!(!html.contains(r#"role="alert""#));
    }

    #[test]
    fn summary_page_escapes_summary() {
        let html = summary_page("Cash <up> & debt down");
        assert!(html.contains("Cash &lt;up&gt; &amp; debt down</textarea>"));
        assert!(html.contains(r#"id="download""#));
    }
}
