//! The parser facade.
//!
//! Owns the base style, one instance of every built-in element and the
//! caller's custom elements, and runs them in a fixed order:
//!
//! ```text
//! CodeEscaping → Escaping → Header → List → Quote → Link → AutomaticLink
//!   → Bold → Italic → custom… → Code → Unescaping
//! ```

use attributed::{Attributes, Color, Font, StyledText};

use crate::config::ParserConfig;
use crate::element::MarkdownElement;
use crate::elements::{AutomaticLink, Bold, Code, CodeEscaping, Header, Italic, Link, List, Quote};
use crate::escape::{Escaping, Unescaping};

/// The built-in elements, individually tunable between parses.
#[derive(Clone, Debug)]
pub struct Elements {
    pub header: Header,
    pub list: List,
    pub quote: Quote,
    pub link: Link,
    pub automatic_link: AutomaticLink,
    pub bold: Bold,
    pub italic: Italic,
    pub code: Code,
}

impl Elements {
    pub fn new(base: &Font) -> Self {
        Self {
            header: Header::new(base),
            list: List::new(base),
            quote: Quote::new(base),
            link: Link::new(base),
            automatic_link: AutomaticLink::new(base),
            bold: Bold::new(base),
            italic: Italic::new(base),
            code: Code::new(base),
        }
    }

    /// Re-derive every element's font from a new base font.
    pub fn set_base_font(&mut self, base: &Font) {
        self.header.set_base_font(base);
        self.list.set_base_font(base);
        self.quote.set_base_font(base);
        self.link.set_base_font(base);
        self.automatic_link.set_base_font(base);
        self.bold.set_base_font(base);
        self.italic.set_base_font(base);
        self.code.set_base_font(base);
    }
}

/// Identifies a custom element registered with
/// [`MarkdownParser::add_custom_element`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementHandle(u64);

/// Converts markdown into [`StyledText`].
///
/// # Examples
///
/// ```
/// use marktext::MarkdownParser;
///
/// let parser = MarkdownParser::new();
/// let text = parser.parse("# Title\nSome **bold** and [a link](http://x)");
/// assert_eq!(text.text(), "Title\nSome bold and a link");
/// ```
pub struct MarkdownParser {
    config: ParserConfig,
    elements: Elements,
    code_escaping: CodeEscaping,
    escaping: Escaping,
    unescaping: Unescaping,
    custom_elements: Vec<(ElementHandle, Box<dyn MarkdownElement>)>,
    next_handle: u64,
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownParser {
    /// Create a parser with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            elements: Elements::new(&config.font),
            config,
            code_escaping: CodeEscaping::new(),
            escaping: Escaping::new(),
            unescaping: Unescaping::new(),
            custom_elements: Vec::new(),
            next_handle: 0,
        }
    }

    /// Create a parser with custom elements already registered.
    ///
    /// Returns the handles in the same order as `elements`.
    pub fn with_custom_elements(
        config: ParserConfig,
        elements: impl IntoIterator<Item = Box<dyn MarkdownElement>>,
    ) -> (Self, Vec<ElementHandle>) {
        let mut parser = Self::with_config(config);
        let handles = elements
            .into_iter()
            .map(|element| parser.add_custom_element(element))
            .collect();
        (parser, handles)
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn elements(&self) -> &Elements {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut Elements {
        &mut self.elements
    }

    pub fn set_automatic_link_detection(&mut self, enabled: bool) {
        self.config.automatic_link_detection = enabled;
    }

    /// Change the base font, and the base color when one is given.
    ///
    /// Every built-in element re-derives its font from `font`. Only later
    /// parses are affected.
    pub fn update_base_style(&mut self, font: Font, color: Option<Color>) {
        self.elements.set_base_font(&font);
        self.config.font = font;
        if let Some(color) = color {
            self.config.color = color;
        }
    }

    /// Register an element to run after the built-ins.
    ///
    /// Custom elements run in registration order, after [`Italic`] and
    /// before code spans are styled and placeholders are restored.
    pub fn add_custom_element(&mut self, element: Box<dyn MarkdownElement>) -> ElementHandle {
        let handle = ElementHandle(self.next_handle);
        self.next_handle += 1;
        log::debug!("registered custom element {} as {:?}", element.name(), handle);
        self.custom_elements.push((handle, element));
        handle
    }

    /// Unregister a custom element, handing it back.
    ///
    /// Returns `None` if the handle is not registered.
    pub fn remove_custom_element(
        &mut self,
        handle: ElementHandle,
    ) -> Option<Box<dyn MarkdownElement>> {
        let index = self
            .custom_elements
            .iter()
            .position(|(registered, _)| *registered == handle)?;
        Some(self.custom_elements.remove(index).1)
    }

    pub fn custom_element_count(&self) -> usize {
        self.custom_elements.len()
    }

    /// Parse markdown text.
    ///
    /// Code points in `U+F0000..=U+F007F` and `U+F0100` are used internally
    /// as placeholders. Input containing them is read as already escaped:
    /// they come back as the matching ASCII character, and a pair of
    /// `U+F0100` delimits a code span.
    pub fn parse(&self, markdown: &str) -> StyledText {
        self.run(StyledText::plain(markdown))
    }

    /// Parse markdown that already carries attributes.
    ///
    /// Existing spans are kept underneath the base style; `markdown` itself
    /// is not modified.
    pub fn parse_styled(&self, markdown: &StyledText) -> StyledText {
        self.run(markdown.clone())
    }

    fn run(&self, mut text: StyledText) -> StyledText {
        let base = Attributes::font(self.config.font.clone()).with_color(self.config.color);
        let whole = 0..text.len();
        if let Err(err) = text.add_attributes(whole, base) {
            log::warn!("base style not applied: {}", err);
        }

        let pipeline = self.pipeline();
        log::debug!(
            "parsing {} bytes with {} elements",
            text.len(),
            pipeline.len()
        );
        for element in pipeline {
            element.parse(&mut text);
            log::trace!("after {}: {:?}", element.name(), text.text());
        }
        text
    }

    /// Elements to run, in order, for the current configuration.
    fn pipeline(&self) -> Vec<&dyn MarkdownElement> {
        let elements = &self.elements;
        let mut pipeline: Vec<&dyn MarkdownElement> =
            Vec::with_capacity(11 + self.custom_elements.len());
        pipeline.push(&self.code_escaping);
        pipeline.push(&self.escaping);
        pipeline.push(&elements.header);
        pipeline.push(&elements.list);
        pipeline.push(&elements.quote);
        pipeline.push(&elements.link);
        if self.config.automatic_link_detection {
            pipeline.push(&elements.automatic_link);
        }
        pipeline.push(&elements.bold);
        pipeline.push(&elements.italic);
        for (_, element) in &self.custom_elements {
            pipeline.push(element.as_ref());
        }
        pipeline.push(&elements.code);
        pipeline.push(&self.unescaping);
        pipeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop;

    impl MarkdownElement for Noop {
        fn parse(&self, _text: &mut StyledText) {}
    }

    #[test]
    fn pipeline_order() {
        let mut parser = MarkdownParser::new();
        parser.add_custom_element(Box::new(Noop));

        let names: Vec<_> = parser
            .pipeline()
            .iter()
            .map(|element| element.name().rsplit("::").next().unwrap_or_default())
            .collect();
        assert_eq!(
            names,
            vec![
                "CodeEscaping",
                "Escaping",
                "Header",
                "List",
                "Quote",
                "Link",
                "AutomaticLink",
                "Bold",
                "Italic",
                "Noop",
                "Code",
                "Unescaping",
            ]
        );
    }

    #[test]
    fn pipeline_skips_automatic_link_when_disabled() {
        let mut parser = MarkdownParser::new();
        parser.set_automatic_link_detection(false);
        let names: Vec<_> = parser.pipeline().iter().map(|e| e.name()).collect();
        assert!(!names.iter().any(|name| name.ends_with("AutomaticLink")));
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn handles_are_unique() {
        let mut parser = MarkdownParser::new();
        let a = parser.add_custom_element(Box::new(Noop));
        let b = parser.add_custom_element(Box::new(Noop));
        assert_ne!(a, b);

        assert!(parser.remove_custom_element(a).is_some());
        assert!(parser.remove_custom_element(a).is_none());
        assert_eq!(parser.custom_element_count(), 1);
    }

    #[test]
    fn with_custom_elements_registers_in_order() {
        let elements: Vec<Box<dyn MarkdownElement>> = vec![Box::new(Noop), Box::new(Noop)];
        let (mut parser, handles) =
            MarkdownParser::with_custom_elements(ParserConfig::default(), elements);

        assert_eq!(handles.len(), 2);
        assert_eq!(parser.custom_element_count(), 2);
        assert!(parser.remove_custom_element(handles[0]).is_some());
        let next = parser.add_custom_element(Box::new(Noop));
        assert!(!handles.contains(&next));
    }

    #[test]
    fn update_base_style_rederives_variants() {
        let mut parser = MarkdownParser::new();
        parser.update_base_style(Font::named("Georgia", 18.0), None);

        let elements = parser.elements();
        assert_eq!(elements.bold.font.size, 18.0);
        assert!(elements.bold.font.is_bold());
        assert!(elements.italic.font.is_italic());
        assert!(elements.code.font.is_monospace());
        assert_eq!(elements.header.font, Font::named("Georgia", 18.0));
        assert_eq!(parser.config().color, Color::BLACK);

        parser.update_base_style(Font::default(), Some(Color::GRAY));
        assert_eq!(parser.config().color, Color::GRAY);
    }
}
