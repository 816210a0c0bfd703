// Pattern 3: Faceted Builder Handoff
// Demonstrates one builder that owns the person under construction while two
// facets, address and job, take turns extending it. Each facet is an owning
// handle over the builder and can switch to the other facet at any point.

use std::fmt;

// ============================================================================
// Example: Address and Job Facets Over One Owned Person
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    // address
    street_address: String,
    post_code: String,
    city: String,
    // employment
    company_name: String,
    position: String,
    annual_income: u64,
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
        writeln!(f, "lives at {} in {} with postcode {}", self.street_address, self.city, self.post_code)?;
        write!(f, "works at {} as a {} earning {}", self.company_name, self.position, self.annual_income)
    }
}

/// Root of the facet chain. The person is owned by value here and travels
/// through whichever facet currently holds the builder; there is never a
/// second handle aliasing it.
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    pub fn lives(self) -> AddressBuilder {
        AddressBuilder { inner: self }
    }

    pub fn works(self) -> JobBuilder {
        JobBuilder { inner: self }
    }

    /// Consumes the builder and returns the person with whatever fields have
    /// been set across all facets so far.
    pub fn finish(self) -> Person {
        self.person
    }
}

/// Facet for the address sub-domain.
pub struct AddressBuilder {
    inner: PersonBuilder,
}

impl AddressBuilder {
    pub fn at(mut self, street_address: impl Into<String>) -> Self {
        self.inner.person.street_address = street_address.into();
        self
    }

    pub fn with_postcode(mut self, post_code: impl Into<String>) -> Self {
        self.inner.person.post_code = post_code.into();
        self
    }

    pub fn in_city(mut self, city: impl Into<String>) -> Self {
        self.inner.person.city = city.into();
        self
    }

    // Hand off to the employment facet.
    pub fn works(self) -> JobBuilder {
        self.inner.works()
    }

    pub fn finish(self) -> Person {
        self.inner.finish()
    }
}

/// Facet for the employment sub-domain.
pub struct JobBuilder {
    inner: PersonBuilder,
}

impl JobBuilder {
    pub fn at(mut self, company_name: impl Into<String>) -> Self {
        self.inner.person.company_name = company_name.into();
        self
    }

    pub fn as_a(mut self, position: impl Into<String>) -> Self {
        self.inner.person.position = position.into();
        self
    }

    pub fn earning(mut self, annual_income: u64) -> Self {
        self.inner.person.annual_income = annual_income;
        self
    }

    // Hand off to the address facet.
    pub fn lives(self) -> AddressBuilder {
        self.inner.lives()
    }

    pub fn finish(self) -> Person {
        self.inner.finish()
    }
}

fn main() {
    println!("=== Two Facets, One Person ===");
    let person = Person::builder()
        .lives()
        .at("123 London Road")
        .in_city("London")
        .with_postcode("SW1 1GB")
        .works()
        .at("PragmaSoft")
        .as_a("Consultant")
        .earning(10_000_000)
        .finish();
    println!("{}", person);

    println!("\n=== Switching Facets Midway ===");
    let person = Person::builder()
        .works()
        .as_a("Engineer")
        .lives()
        .in_city("Berlin")
        .works()
        .at("Initech")
        .finish();
    println!("{}", person);

    println!("\n=== Facets Are Optional ===");
    let person = Person::builder()
        .lives()
        .in_city("Oslo")
        .finish();
    println!("{}", person);
}

#[cfg(test)]
mod facet_tests {
    use super::*;

    #[test]
    fn finish_returns_the_union_of_both_facets() {
        let person = Person::builder()
            .lives()
            .at("123 London Road")
            .in_city("London")
            .with_postcode("SW1 1GB")
            .works()
            .at("PragmaSoft")
            .as_a("Consultant")
            .earning(10_000_000)
            .finish();

        assert_eq!(person.street_address, "123 London Road");
        assert_eq!(person.city, "London");
        assert_eq!(person.post_code, "SW1 1GB");
        assert_eq!(person.company_name, "PragmaSoft");
        assert_eq!(person.position, "Consultant");
        assert_eq!(person.annual_income, 10_000_000);
    }

    #[test]
    fn switching_facets_preserves_earlier_fields() {
        let person = Person::builder()
            .works()
            .as_a("Engineer")
            .lives()
            .in_city("Berlin")
            .works()
            .at("Initech")
            .finish();

        assert_eq!(person.position, "Engineer");
        assert_eq!(person.city, "Berlin");
        assert_eq!(person.company_name, "Initech");
    }

    #[test]
    fn unused_facet_leaves_its_fields_at_default() {
        let person = Person::builder().lives().in_city("Oslo").finish();

        assert_eq!(person.city, "Oslo");
        assert_eq!(person.company_name, "");
        assert_eq!(person.position, "");
        assert_eq!(person.annual_income, 0);
    }

    #[test]
    fn finish_without_any_facet_yields_defaults() {
        assert_eq!(Person::builder().finish(), Person::default());
    }

    #[test]
    fn last_write_wins_within_a_facet() {
        let person = Person::builder()
            .lives()
            .in_city("draft")
            .in_city("final")
            .finish();
        assert_eq!(person.city, "final");
    }
}
