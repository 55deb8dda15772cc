//! # 画廊页面生成模块
//!
//! ## 设计思路
//!
//! 生成一页静态 `index.html`：深色终端风样式，每幅画稿一个区块，
//! 包含标题、可复制的终端命令、图片与指向在线编辑器的链接。
//! 页面按记录在数据集中的顺序排列。
//!
//! ## 实现思路
//!
//! - 所有进入页面的动态文本（标题、命令）先经 HTML 转义。
//! - 终端命令复刻原始工具链：`python -c "$(curl -s <脚本地址>)" '<载荷>'`。
//! - 页脚年份取自本地时间。

use chrono::{Datelike, Local};

/// 在线渲染脚本地址（终端命令中引用）。
const TOOL_SCRIPT_URL: &str =
    "https://raw.githubusercontent.com/kui/ansi_pixels/master/tool/ansi-pixels.py";

/// 在线编辑器地址，画稿载荷作为 URL 片段拼接在后。
const EDITOR_URL: &str = "https://kui.github.io/ansi_pixels/";

const MONO_FONT: &str = "Consolas, 'Courier New', Courier, Monaco, monospace";

/// 页面渲染所需的单条画稿条目。
#[derive(Debug, Clone)]
pub struct GalleryEntry {
    /// 展示标题（渲染前转义）。
    pub title: String,
    /// 原始 Base64 载荷（拼接命令与编辑链接）。
    pub encoded: String,
    /// 页面内引用的图片相对路径。
    pub image_href: String,
}

/// 渲染完整的画廊页面。
pub fn render(entries: &[GalleryEntry]) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        r#"<meta charset="utf8">
<link rel="shortcut icon" href="favicon.png" type="image/png">
<title>ANSI Pixels Examples</title>
<style>
body {{
  color: white;
  background-color: #333;
}}
a {{ color: #99f; }}
p.terminal {{
  width: 100%;
  font-family: {MONO_FONT};
}}
p.terminal > input {{
  color: white;
  width: calc(100% - 3em);
  background-color: transparent;
  border: black 0px solid;
  font-family: {MONO_FONT};
}}
</style>

<header>
  <h1>ANSI Pixels Examples</h1>
  <p>Example arts with
    <a href="{EDITOR_URL}">ANSI Pixels</a></p>
</header>
"#
    ));

    for entry in entries {
        html.push_str(&render_entry(entry));
    }

    html.push_str(&format!(
        r#"
<footer>
  <p><small>Copyright © {year}</small></p>
</footer>
"#,
        year = Local::now().year()
    ));

    html
}

/// 渲染单幅画稿区块。
fn render_entry(entry: &GalleryEntry) -> String {
    let command = escape_html(&format!(
        r#"python -c "$(curl -s {TOOL_SCRIPT_URL})" '{}'"#,
        entry.encoded
    ));

    format!(
        r#"
<div>
  <h2>{title}</h2>
  <p class="terminal">
    $ <input readonly value="{command}" onfocus="this.select();">
    <br>
    <img class="px-img" src="{href}">
    <a href="{EDITOR_URL}#{encoded}">Edit this</a>
  </p>
</div>
"#,
        title = escape_html(&entry.title),
        command = command,
        href = escape_html(&entry.image_href),
        encoded = escape_html(&entry.encoded),
    )
}

/// HTML 转义：`&` `<` `>` `"` `'` 不得原样进入页面。
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
