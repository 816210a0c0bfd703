// Builder Pattern Catalog
// This crate demonstrates variations of the Builder pattern.

pub mod examples {
    //! # Builder Pattern Catalog
    //!
    //! This crate provides runnable examples for:
    //!
    //! ## Pattern 1: Fluent Setter Builder
    //! - Chained setters on one builder
    //! - Explicit consume-by-value `build()`
    //!
    //! ## Pattern 2: Flattened Builder Chain
    //! - One concrete builder covering every setter group
    //! - Single unbroken fluent chain, no inheritance
    //!
    //! ## Pattern 3: Faceted Builder Handoff
    //! - Address and job facets over one owned result
    //! - Facet switching at any point in the chain
    //!
    //! ## Pattern 4: Callback-Scoped Builder
    //! - Builder lifetime bounded by one closure call
    //! - Host reads the result back after the callback returns
    //!
    //! ## Pattern 5: Tree Builder for Markup
    //! - Nested tags assembled from pre-built children
    //! - Rendering by structural recursion
    //!
    //! Run individual examples with:
    //! ```bash
    //! cargo run --bin p1_fluent_html
    //! cargo run --bin p2_person_chain
    //! cargo run --bin p3_faceted_person
    //! cargo run --bin p4_email_callback
    //! cargo run --bin p5_markup_tree
    //! ```
}
