// Pattern 1: Fluent Setter Builder
// Demonstrates chained setters on a single builder that owns the element
// under construction and hands it out through an explicit build().

use std::fmt;

// ============================================================================
// Example: HTML Element Built Through a Fluent Chain
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlElement {
    name: String,
    text: String,
    elements: Vec<HtmlElement>,
}

impl HtmlElement {
    fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        HtmlElement {
            name: name.into(),
            text: text.into(),
            elements: Vec::new(),
        }
    }

    // Entry point to the builder; elements have no public constructor.
    pub fn builder(root_name: impl Into<String>) -> HtmlBuilder {
        HtmlBuilder {
            root: HtmlElement::new(root_name, ""),
        }
    }

    /// Renders the element and its children. A childless element renders on
    /// one line as `<name> text </name>`; an element with children renders
    /// its open tag, its text, each child in order, then its close tag.
    pub fn render(&self) -> String {
        if self.elements.is_empty() {
            return format!("<{}> {} </{}>", self.name, self.text, self.name);
        }
        let mut out = format!("<{}>{}", self.name, self.text);
        for child in &self.elements {
            out.push_str(&child.render());
        }
        out.push_str(&format!("</{}>", self.name));
        out
    }
}

impl fmt::Display for HtmlElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

pub struct HtmlBuilder {
    root: HtmlElement,
}

impl HtmlBuilder {
    // Each call appends one leaf child and hands the builder back for the
    // next call in the chain.
    pub fn add_child(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.root.elements.push(HtmlElement::new(name, text));
        self
    }

    /// Consumes the builder and returns the finished root element. The
    /// builder cannot be reused afterwards; reuse is a move error.
    pub fn build(self) -> HtmlElement {
        self.root
    }
}

fn main() {
    println!("=== Fluent Chain ===");
    let list = HtmlElement::builder("ul")
        .add_child("li", "hello world")
        .add_child("li", "user to api")
        .build();
    println!("{}", list);

    println!("\n=== Childless Root Renders as a Leaf ===");
    let empty = HtmlElement::builder("p").build();
    println!("{}", empty);

    println!("\n=== Builder Cannot Be Reused ===");
    println!("add_child and build both consume the builder, so the chain");
    println!("moves through each call and ends at exactly one element.");

    // This would NOT compile:
    // let builder = HtmlElement::builder("ul");
    // let a = builder.build();
    // let b = builder.build(); // ERROR: use of moved value
}
