// Pattern 2: Flattened Builder Chain
// Demonstrates one concrete builder exposing every setter group directly, so
// a single unbroken fluent chain covers identity, job, and date-of-birth
// fields without any inheritance between "levels".

use std::fmt;

// ============================================================================
// Example: Person Assembled by One Chain Across All Field Groups
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    name: String,
    position: String,
    date_of_birth: String,
}

impl Person {
    pub fn builder() -> PersonBuilder {
        PersonBuilder {
            person: Person::default(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name: {}\nposition: {}\ndate_of_birth: {}",
            self.name, self.position, self.date_of_birth
        )
    }
}

/// One flat builder instead of a tower of "level" types: every setter is a
/// plain method that consumes and returns the builder, so a method from any
/// group can follow a method from any other group.
#[derive(Default)]
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    // Identity group.
    pub fn called(mut self, name: impl Into<String>) -> Self {
        self.person.name = name.into();
        self
    }

    // Job group.
    pub fn works_as(mut self, position: impl Into<String>) -> Self {
        self.person.position = position.into();
        self
    }

    // Date-of-birth group.
    pub fn born_on(mut self, date_of_birth: impl Into<String>) -> Self {
        self.person.date_of_birth = date_of_birth.into();
        self
    }

    /// Consumes the builder and returns the finished person by value; the
    /// builder cannot mutate the result afterwards.
    pub fn build(self) -> Person {
        self.person
    }
}

fn main() {
    println!("=== One Unbroken Chain ===");
    let person = Person::builder()
        .called("John")
        .works_as("C++ Developer")
        .born_on("1990-01-01")
        .build();
    println!("{}", person);

    println!("\n=== Setters Compose in Any Order ===");
    let person = Person::builder()
        .born_on("1985-06-15")
        .called("Mary")
        .works_as("Consultant")
        .build();
    println!("{}", person);

    println!("\n=== Omitted Fields Keep Their Defaults ===");
    let person = Person::builder().called("Ann").build();
    println!("{}", person);

    println!("\n=== Last Write Wins ===");
    let person = Person::builder()
        .called("draft")
        .called("final")
        .build();
    println!("{}", person);
}
