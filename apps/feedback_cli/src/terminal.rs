//! Line-oriented rendering of the feedback page for a terminal.

use std::{collections::HashMap, io::Write};

use feedback_ui::{
    presentation::{EmotionsDisplay, SentimentTreatment},
    Element, View,
};

const BAR_CELLS: usize = 20;

pub struct TerminalView<W> {
    out: W,
    input: String,
    texts: HashMap<Element, String>,
    widths: HashMap<Element, f64>,
    visible: HashMap<Element, bool>,
    enabled: bool,
    treatment: Option<SentimentTreatment>,
    emotions: Option<EmotionsDisplay>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            input: String::new(),
            texts: HashMap::new(),
            widths: HashMap::new(),
            visible: HashMap::new(),
            enabled: true,
            treatment: None,
            emotions: None,
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn append_input_line(&mut self, line: &str) {
        if !self.input.is_empty() {
            self.input.push('\n');
        }
        self.input.push_str(line);
    }

    pub fn accepts_submit(&self) -> bool {
        self.enabled
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn text(&self, element: Element) -> &str {
        self.texts.get(&element).map(String::as_str).unwrap_or_default()
    }

    fn emit(&mut self, block: String) {
        if let Err(err) = self.out.write_all(block.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %err, "failed to write to terminal");
        }
    }

    fn results_block(&self) -> String {
        let mut block = String::new();
        block.push_str(&format!("Primary emotion: {}\n", self.text(Element::PrimaryEmotion)));
        block.push_str(&format!(
            "Confidence:      {} {}\n",
            bar(self.widths.get(&Element::ConfidenceBar).copied().unwrap_or(0.0)),
            self.text(Element::ConfidenceScore)
        ));
        let icon = self
            .treatment
            .map(|treatment| treatment.icon.glyph())
            .unwrap_or_default();
        block.push_str(&format!(
            "Sentiment:       {icon} {}\n",
            self.text(Element::OverallSentiment)
        ));
        block.push_str("Emotions:\n");
        match &self.emotions {
            Some(EmotionsDisplay::Rows(rows)) => {
                for row in rows {
                    block.push_str(&format!(
                        "  {} {:<10} {} {:>6}\n",
                        row.icon.glyph(),
                        row.label,
                        bar(row.width),
                        row.percent
                    ));
                }
            }
            Some(EmotionsDisplay::Placeholder(message)) => {
                block.push_str(&format!("  {message}\n"));
            }
            None => {}
        }
        block
    }
}

fn bar(width_percent: f64) -> String {
    let filled = ((width_percent / 100.0) * BAR_CELLS as f64).round() as usize;
    let filled = filled.min(BAR_CELLS);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_CELLS - filled))
}

impl<W: Write + Send> View for TerminalView<W> {
    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn set_text(&mut self, element: Element, text: &str) {
        if element == Element::FeedbackInput {
            self.input = text.to_string();
        }
        self.texts.insert(element, text.to_string());
    }

    fn set_width_percent(&mut self, element: Element, percent: f64) {
        self.widths.insert(element, percent);
    }

    // Regions print when they become visible.
    fn set_visible(&mut self, element: Element, visible: bool) {
        let was_visible = self.visible.insert(element, visible).unwrap_or(false);
        if !visible || was_visible {
            return;
        }
        tracing::trace!(region = element.id(), "region shown");
        match element {
            Element::Loading => self.emit(format!("{}\n", self.text(Element::AnalyzeButton))),
            Element::ErrorMessage => {
                self.emit(format!("error: {}\n", self.text(Element::ErrorMessage)))
            }
            Element::ResultSection => self.emit(self.results_block()),
            _ => {}
        }
    }

    fn set_enabled(&mut self, element: Element, enabled: bool) {
        if element == Element::AnalyzeButton {
            self.enabled = enabled;
        }
    }

    fn set_treatment(&mut self, _element: Element, treatment: SentimentTreatment) {
        self.treatment = Some(treatment);
    }

    fn set_emotions(&mut self, emotions: &EmotionsDisplay) {
        self.emotions = Some(emotions.clone());
    }
}
