use crate::ascii::ASCII;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::stats::Stats;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::path::Path;

const WIDTH: &str = "1040";
const HEIGHT: &str = "660";
const VIEW_BOX: &str = "0 0 1020 650";
const LEFT_X: &str = "30";
const PROFILE_X: &str = "400";
const LINE_STEP: &str = "1.3em";
const SECTION_STEP: &str = "2.3em";
const INDENT: &str = "    ";

const KERNEL_BANNER: &str = "Arch Linux 6.7.1-arch1-1 (tty1)";
const LOGIN_TIME_FORMAT: &str = "%a %b %d %H:%M:%S %Y on tty1";
const SEPARATOR_LINE: &str = "-----------------------";
const REBOOT_COMMAND: &str = r#"echo "Reboot in 5 sec..." ; sleep 5 ; reboot"#;

const STYLE: &str = r#"
        * {
            font-family: 'JetBrains Mono', monospace;
        }

        .bg {
            fill: #11111b;
            filter: drop-shadow(5px 5px 10px rgba(0, 0, 0, 0.5));
        }

        #text-1 {
            fill: #f38ba8;
        }

        #text-2,
        #text-3 {
            fill: #f5c2e7;
        }

        .text {
            font-size: 17px;
            fill: #cdd6f4;
        }

        .text tspan {
            fill: #9399b2;
        }

        .command {
            fill: #a6e3a1 !important;
        }

        .str-command {
            fill: #fab387 !important;
        }

        .art {
            font-size: 15px;
            fill: #89b4fa;
        }

        .profile {
            font-size: 17px;
            fill: #89dceb;
        }

        #reboot-command, #reboot-status {
            display: none !important;
        }
            "#;

/// Background panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rect {
    pub id: &'static str,
    pub class: &'static str,
    pub width: &'static str,
    pub height: &'static str,
    pub rx: &'static str,
    pub ry: &'static str,
    pub x: &'static str,
    pub y: &'static str,
}

/// Independently styled run inside a [`Text`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tspan {
    pub id: Option<&'static str>,
    pub class: Option<&'static str>,
    pub x: Option<&'static str>,
    pub dy: Option<&'static str>,
    pub value: String,
}

impl Tspan {
    fn styled(id: &'static str, class: &'static str, value: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            class: Some(class),
            value: value.into(),
            ..Self::default()
        }
    }

    /// A line that starts at `x` one step below the previous one.
    fn line(
        id: Option<&'static str>,
        x: &'static str,
        dy: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id,
            x: Some(x),
            dy: Some(dy),
            value: value.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub id: &'static str,
    pub class: &'static str,
    pub x: &'static str,
    pub y: &'static str,
    pub value: String,
    pub spans: Vec<Tspan>,
}

impl Text {
    fn new(id: &'static str, class: &'static str, x: &'static str, y: &'static str) -> Self {
        Self {
            id,
            class,
            x,
            y,
            value: String::new(),
            spans: Vec::new(),
        }
    }

    fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    fn span(mut self, span: Tspan) -> Self {
        self.spans.push(span);
        self
    }

    fn spans(mut self, spans: impl IntoIterator<Item = Tspan>) -> Self {
        self.spans.extend(spans);
        self
    }

    /// Find a sub-span by id.
    pub fn find_span(&self, id: &str) -> Option<&Tspan> {
        self.spans.iter().find(|s| s.id == Some(id))
    }
}

/// The card as data: fixed structure, only text content varies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub background: Rect,
    pub texts: Vec<Text>,
    pub style: &'static str,
}

/// Escape markup characters and replace anything XML 1.0 can't carry.
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c if is_xml_char(c) => out.push(c),
            _ => out.push(char::REPLACEMENT_CHARACTER),
        }
    }
    out
}

/// The XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}' | '\u{A}' | '\u{D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

fn push_attr(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(v) = value {
        out.push_str(&format!(" {name}=\"{}\"", escape_xml(v)));
    }
}

fn push_tspan(out: &mut String, span: &Tspan) {
    out.push_str("<tspan");
    push_attr(out, "id", span.id);
    push_attr(out, "class", span.class);
    push_attr(out, "x", span.x);
    push_attr(out, "dy", span.dy);
    out.push_str(&format!(">{}</tspan>", escape_xml(&span.value)));
}

impl Document {
    pub fn text(&self, id: &str) -> Option<&Text> {
        self.texts.iter().find(|t| t.id == id)
    }

    /// Serialize to SVG markup.
    ///
    /// Texts with a leading label keep their spans on the same line so no
    /// stray whitespace ends up between label and value. Pure span blocks
    /// put one span per line.
    pub fn to_xml(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" ?>\n");
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" \
             viewBox=\"{VIEW_BOX}\" preserveAspectRatio=\"xMidYMid\">\n"
        ));

        let bg = &self.background;
        out.push_str(&format!(
            "{INDENT}<rect id=\"{}\" class=\"{}\" width=\"{}\" height=\"{}\" \
             rx=\"{}\" ry=\"{}\" x=\"{}\" y=\"{}\"></rect>\n",
            bg.id, bg.class, bg.width, bg.height, bg.rx, bg.ry, bg.x, bg.y
        ));

        for text in &self.texts {
            out.push_str(&format!(
                r#"{INDENT}<text id="{}" class="{}" x="{}" y="{}">"#,
                text.id, text.class, text.x, text.y
            ));
            if text.value.is_empty() {
                for span in &text.spans {
                    out.push('\n');
                    out.push_str(INDENT);
                    out.push_str(INDENT);
                    push_tspan(&mut out, span);
                }
                out.push_str(&format!("\n{INDENT}</text>\n"));
            } else {
                out.push_str(&escape_xml(&text.value));
                for span in &text.spans {
                    push_tspan(&mut out, span);
                }
                out.push_str("</text>\n");
            }
        }

        out.push_str(&format!("{INDENT}<style><![CDATA[{}]]></style>\n", self.style));
        out.push_str("</svg>\n");
        out
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_xml()).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn build_ascii_tspans() -> Vec<Tspan> {
    ASCII
        .lines()
        .map(|line| Tspan::line(None, LEFT_X, LINE_STEP, line))
        .collect()
}

fn build_profile_tspans(stats: &Stats, username: &str) -> Vec<Tspan> {
    let account = stats.account();
    let row = |id, dy, value: String| Tspan::line(Some(id), PROFILE_X, dy, value);

    vec![
        row("profile-username", LINE_STEP, username.to_string()),
        row("profile-separator", LINE_STEP, SEPARATOR_LINE.to_string()),
        row("user-bio", SECTION_STEP, format!("Bio: {}", stats.bio())),
        row("followers", LINE_STEP, format!("Followers: {}", account.followers)),
        row("profile-following", LINE_STEP, format!("Following: {}", account.following)),
        row("total-repo", SECTION_STEP, format!("Total Repo: {}", account.public_repos)),
        row("total-stars", LINE_STEP, format!("Total Stars: {}", stats.stars())),
        row("total-commits", LINE_STEP, format!("Total Commits: {}", stats.commits_total())),
        row(
            "most-used-language",
            LINE_STEP,
            format!("Most used language: {}", stats.languages()),
        ),
    ]
}

/// Lay out the card. Depends only on its arguments; `now` fills the
/// "Last login" line.
pub fn build_document<Tz>(stats: &Stats, config: &Config, now: &DateTime<Tz>) -> Document
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let user = config.username.as_str();
    let prompt = format!("[{user}@github ~]$ ");
    let last_login = now.format(LOGIN_TIME_FORMAT).to_string();

    let texts = vec![
        Text::new("text-1", "text", LEFT_X, "40").value(KERNEL_BANNER),
        Text::new("text-2", "text", LEFT_X, "80")
            .value("github.com login: ")
            .span(Tspan::styled("login-username", "login", user)),
        Text::new("text-3", "text", LEFT_X, "110")
            .value("password: ")
            .span(Tspan::styled("password", "password", "******")),
        Text::new("text-4", "text", LEFT_X, "140")
            .value("Last login: ")
            .span(Tspan::styled("last-login", "last-login", last_login)),
        Text::new("text-5", "text", LEFT_X, "190")
            .value(prompt.clone())
            .span(Tspan::styled("whoami", "command", "./whoami.sh")),
        Text::new("art", "art", LEFT_X, "220").spans(build_ascii_tspans()),
        Text::new("profile-info", "profile", PROFILE_X, "220")
            .spans(build_profile_tspans(stats, user)),
        Text::new("reboot-message", "text", LEFT_X, "550")
            .value(prompt)
            .span(Tspan::styled("reboot-command", "reboot-command", REBOOT_COMMAND))
            .span(Tspan::line(Some("reboot-status"), LEFT_X, "2em", "Reboot in 5 sec...")),
    ];

    Document {
        background: Rect {
            id: "bg-rect",
            class: "bg",
            width: "1000",
            height: "620",
            rx: "20",
            ry: "20",
            x: "10",
            y: "10",
        },
        texts,
        style: STYLE,
    }
}
