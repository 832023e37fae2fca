//! Display model shared by the dispatcher and the renderers.
//!
//! The dispatcher never writes to stdout directly. It builds [`Line`]s,
//! [`Table`]s and [`Panel`]s and hands them to a [`Screen`]. The terminal
//! renderer lives in the CLI crate; [`RecordingScreen`] captures frames for
//! tests.

/// Named colors used by the pit wall theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    Magenta,
    White,
    Grey,
    Orange,
    Gold,
    Violet,
}

/// Text attributes for a [`Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Tone>,
    pub bg: Option<Tone>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            dim: false,
            italic: false,
        }
    }

    pub const fn fg(mut self, tone: Tone) -> Self {
        self.fg = Some(tone);
        self
    }

    pub const fn bg(mut self, tone: Tone) -> Self {
        self.bg = Some(tone);
        self
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// A run of text with a single style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::new(),
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

impl From<&str> for Span {
    fn from(text: &str) -> Self {
        Span::plain(text)
    }
}

impl From<String> for Span {
    fn from(text: String) -> Self {
        Span::plain(text)
    }
}

/// One output line made of styled spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![Span::plain(text)])
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self::new(vec![Span::styled(text, style)])
    }

    pub fn blank() -> Self {
        Self::default()
    }

    /// Builder: appends a span.
    #[must_use]
    pub fn push(mut self, span: impl Into<Span>) -> Self {
        self.spans.push(span.into());
        self
    }

    /// Concatenated text without styling.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Line::plain(text)
    }
}

impl From<Span> for Line {
    fn from(span: Span) -> Self {
        Line::new(vec![span])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Column header definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            align: Align::Left,
        }
    }

    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// A titled table with header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub title: Option<String>,
    pub border: Tone,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Span>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            title: None,
            border: Tone::Grey,
            columns,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn border(mut self, tone: Tone) -> Self {
        self.border = tone;
        self
    }

    pub fn add_row(&mut self, row: Vec<Span>) {
        self.rows.push(row);
    }
}

/// A framed block of lines with a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub border: Tone,
    pub width: Option<u16>,
    pub body: Vec<Line>,
}

impl Panel {
    pub fn new(body: Vec<Line>) -> Self {
        Self {
            title: None,
            subtitle: None,
            border: Tone::Grey,
            width: None,
            body,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn border(mut self, tone: Tone) -> Self {
        self.border = tone;
        self
    }

    #[must_use]
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }
}

/// Key/value row for grid-style panels: right-aligned bold label, then value.
pub fn field(label: &str, width: usize, value: Vec<Span>) -> Line {
    let mut spans = vec![Span::styled(
        format!("{label:>width$}  "),
        Style::new().fg(Tone::White).bold(),
    )];
    spans.extend(value);
    Line::new(spans)
}

/// Output surface the dispatcher renders onto.
pub trait Screen {
    /// Prints one line followed by a newline.
    fn line(&mut self, line: Line);
    fn table(&mut self, table: Table);
    fn panel(&mut self, panel: Panel);
    /// Clears the visible surface.
    fn clear(&mut self);
    /// Prints the prompt without a trailing newline.
    fn prompt(&mut self, prompt: Line);
}

/// Everything a [`RecordingScreen`] has received, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Line(Line),
    Table(Table),
    Panel(Panel),
    Clear,
    Prompt(Line),
}

/// Screen that records frames instead of drawing them.
#[derive(Debug, Default)]
pub struct RecordingScreen {
    pub frames: Vec<Frame>,
}

impl RecordingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain-text dump of every frame except prompts.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for frame in &self.frames {
            match frame {
                Frame::Line(line) => {
                    out.push_str(&line.text());
                    out.push('\n');
                }
                Frame::Table(table) => {
                    if let Some(title) = &table.title {
                        out.push_str(title);
                        out.push('\n');
                    }
                    for row in &table.rows {
                        let cells: Vec<&str> = row.iter().map(|s| s.text.as_str()).collect();
                        out.push_str(&cells.join(" | "));
                        out.push('\n');
                    }
                }
                Frame::Panel(panel) => {
                    if let Some(title) = &panel.title {
                        out.push_str(title);
                        out.push('\n');
                    }
                    for line in &panel.body {
                        out.push_str(&line.text());
                        out.push('\n');
                    }
                }
                Frame::Clear | Frame::Prompt(_) => {}
            }
        }
        out
    }

    /// Tables received so far.
    pub fn tables(&self) -> Vec<&Table> {
        self.frames
            .iter()
            .filter_map(|f| match f {
                Frame::Table(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.frames
            .iter()
            .filter_map(|f| match f {
                Frame::Prompt(p) => Some(p.text()),
                _ => None,
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.frames.clear();
    }
}

impl Screen for RecordingScreen {
    fn line(&mut self, line: Line) {
        self.frames.push(Frame::Line(line));
    }

    fn table(&mut self, table: Table) {
        self.frames.push(Frame::Table(table));
    }

    fn panel(&mut self, panel: Panel) {
        self.frames.push(Frame::Panel(panel));
    }

    fn clear(&mut self) {
        self.frames.push(Frame::Clear);
    }

    fn prompt(&mut self, prompt: Line) {
        self.frames.push(Frame::Prompt(prompt));
    }
}
