//! Semantic events produced by the demo and their console rendering.
//!
//! The order of recorded [`Event`]s is what the demonstration guarantees; the
//! text produced by `Display` is only one rendering of it.

use crate::abstract_factory::ShapeKind;
use colored::Colorize;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Section { title: String },
    PizzaOpened {
        dough: String,
        sauce: String,
        topping: String,
    },
    ApplicationConstructed,
    CreatorConstructed { creator: String },
    NewDocumentRequested { name: String },
    DocumentCreated { creator: String, name: String },
    DocumentOpened { kind: String, name: String },
    DocumentClosed { kind: String, name: String },
    DocsReported { names: Vec<String> },
    ShapeDrawn { kind: ShapeKind, id: u64 },
}

impl Event {
    pub fn section(title: impl Into<String>) -> Self {
        Self::Section {
            title: title.into(),
        }
    }

    /// Console form of the event, with the same colour scheme the binary uses.
    pub fn styled(&self) -> String {
        match self {
            Event::Section { .. } => self.to_string().bold().to_string(),
            Event::PizzaOpened { .. } | Event::ShapeDrawn { .. } => {
                self.to_string().green().to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Section { title } => {
                write!(f, "\n----------------{title} ---------------------------")
            }
            Event::PizzaOpened {
                dough,
                sauce,
                topping,
            } => write!(
                f,
                "Pizza with {dough} dough, {sauce} sauce and {topping} topping. Mmm."
            ),
            Event::ApplicationConstructed => write!(f, "Application: ctor"),
            Event::CreatorConstructed { creator } => write!(f, "{creator}: ctor"),
            Event::NewDocumentRequested { .. } => write!(f, "Application: NewDocument()"),
            Event::DocumentCreated { creator, .. } => {
                write!(f, "   {creator}: CreateDocument()")
            }
            Event::DocumentOpened { kind, .. } => write!(f, "   {kind}: Open()"),
            Event::DocumentClosed { kind, .. } => write!(f, "   {kind}: Close()"),
            Event::DocsReported { names } => {
                write!(f, "Application: ReportDocs()")?;
                for name in names {
                    write!(f, "\n   {name}")?;
                }
                Ok(())
            }
            Event::ShapeDrawn { kind, id } => write!(f, "{kind} {id}: draw"),
        }
    }
}

/// Ordered log of events. When echoing, each event is printed as it arrives.
#[derive(Debug, Default)]
pub struct Transcript {
    events: Vec<Event>,
    echo: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn echoing() -> Self {
        Self {
            events: Vec::new(),
            echo: true,
        }
    }

    pub fn record(&mut self, event: Event) {
        if self.echo {
            println!("{}", event.styled());
        }
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pizza_line_matches_classic_wording() {
        let event = Event::PizzaOpened {
            dough: "cross".to_string(),
            sauce: "mild".to_string(),
            topping: "ham+pineapple".to_string(),
        };
        assert_eq!(
            event.to_string(),
            "Pizza with cross dough, mild sauce and ham+pineapple topping. Mmm."
        );
    }

    #[test]
    fn test_report_lists_names_indented() {
        let event = Event::DocsReported {
            names: vec!["foo".to_string(), "bar".to_string()],
        };
        assert_eq!(event.to_string(), "Application: ReportDocs()\n   foo\n   bar");
    }

    #[test]
    fn test_shape_line() {
        let event = Event::ShapeDrawn {
            kind: ShapeKind::Rectangle,
            id: 7,
        };
        assert_eq!(event.to_string(), "rectangle 7: draw");
    }

    #[test]
    fn test_silent_transcript_keeps_order() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());
        transcript.record(Event::ApplicationConstructed);
        transcript.record(Event::section("BUILDER"));
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.events()[0], Event::ApplicationConstructed);
    }

    #[test]
    fn test_json_is_tagged() {
        let mut transcript = Transcript::new();
        transcript.record(Event::ShapeDrawn {
            kind: ShapeKind::Circle,
            id: 0,
        });
        let json = transcript.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["event"], "shape_drawn");
        assert_eq!(value[0]["kind"], "circle");
        assert_eq!(value[0]["id"], 0);
    }
}
