// Pattern 5: Tree Builder for Markup
// Demonstrates building a nested tag structure either as a leaf with text or
// from a list of pre-built children, then rendering it by structural
// recursion.

use std::fmt;

// ============================================================================
// Example: Markup Tags Assembled From Pre-Built Children
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    name: String,
    text: String,
    children: Vec<Tag>,
    // Ordered; duplicate keys are allowed.
    attributes: Vec<(String, String)>,
}

impl Tag {
    /// A leaf tag carrying only text.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Tag {
            name: name.into(),
            text: text.into(),
            ..Tag::default()
        }
    }

    /// A composite tag wrapping pre-built children.
    pub fn with_children(name: impl Into<String>, children: Vec<Tag>) -> Self {
        Tag {
            name: name.into(),
            children,
            ..Tag::default()
        }
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Leaf tags render as `<name> text </name>`; composite tags render the
    /// open tag, their text, each child's rendering in order, then the close
    /// tag. Attributes are carried on the tag but never rendered.
    pub fn render(&self) -> String {
        if self.children.is_empty() {
            return format!("<{}> {} </{}>", self.name, self.text, self.name);
        }
        let mut out = format!("<{}>{}", self.name, self.text);
        for child in &self.children {
            out.push_str(&child.render());
        }
        out.push_str(&format!("</{}>", self.name));
        out
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name: {} text: {}", self.name, self.text)
    }
}

// A small markup vocabulary over the generic tag.

pub fn paragraph(children: Vec<Tag>) -> Tag {
    Tag::with_children("P", children)
}

pub fn paragraph_text(text: impl Into<String>) -> Tag {
    Tag::with_text("P", text)
}

pub fn image(url: impl Into<String>) -> Tag {
    Tag::with_text("IMG", "").attribute("src", url)
}

fn main() {
    println!("=== Composite From Pre-Built Children ===");
    let p = paragraph(vec![image("http://baidu.com")]);
    println!("{}", p);
    println!("{}", p.render());

    println!("\n=== Leaf With Text ===");
    let caption = paragraph_text("hello world");
    println!("{}", caption.render());

    println!("\n=== Attributes Are Stored, Not Rendered ===");
    let img = image("http://example.com/logo.png");
    println!("attributes: {:?}", img.attributes());
    println!("rendered:   {}", img.render());
}
