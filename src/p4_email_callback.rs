// Pattern 4: Callback-Scoped Builder
// Demonstrates a builder whose whole lifetime is one closure call: the host
// operation creates it, the caller's closure configures it, and the host
// reads the finished value back after the closure returns.

// ============================================================================
// Example: Email Configured Inside a Caller-Supplied Closure
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Email {
    from: String,
    to: String,
    subject: String,
    body: String,
}

/// Handed to the caller's closure by mutable reference. Setters return
/// `&mut Self` so the closure can chain them; nothing here escapes the call.
#[derive(Default)]
pub struct EmailBuilder {
    email: Email,
}

impl EmailBuilder {
    pub fn from(&mut self, from: impl Into<String>) -> &mut Self {
        self.email.from = from.into();
        self
    }

    pub fn to(&mut self, to: impl Into<String>) -> &mut Self {
        self.email.to = to.into();
        self
    }

    pub fn subject(&mut self, subject: impl Into<String>) -> &mut Self {
        self.email.subject = subject.into();
        self
    }

    pub fn body(&mut self, body: impl Into<String>) -> &mut Self {
        self.email.body = body.into();
        self
    }
}

#[derive(Default)]
pub struct MailService {
    outbox: Vec<Email>,
}

impl MailService {
    /// Creates a fresh builder, lets `configure` fill it in, then delivers
    /// the result. The closure must configure the email fully before
    /// returning; the builder is dropped before this method returns.
    pub fn send_email(&mut self, configure: impl FnOnce(&mut EmailBuilder)) {
        let mut builder = EmailBuilder::default();
        configure(&mut builder);
        self.deliver(builder.email);
    }

    fn deliver(&mut self, email: Email) {
        println!(
            "Sending email from {} to {} with subject {} and body {}",
            email.from, email.to, email.subject, email.body
        );
        self.outbox.push(email);
    }

    pub fn outbox(&self) -> &[Email] {
        &self.outbox
    }
}

fn main() {
    let mut service = MailService::default();

    println!("=== Configure Inside the Callback ===");
    service.send_email(|email| {
        email.from("Alice").to("Bob").subject("Hello").body("Hi there!");
    });

    println!("\n=== Unset Fields Keep Their Defaults ===");
    service.send_email(|email| {
        email.from("Alice").to("Carol");
    });

    println!("\n=== Nothing Outlives the Call ===");
    println!("The builder exists only between send_email's entry and the");
    println!("closure's return; only finished emails reach the outbox.");
    println!("Outbox size: {}", service.outbox().len());
}

#[cfg(test)]
mod callback_tests {
    use super::*;

    #[test]
    fn host_observes_exactly_what_the_closure_set() {
        let mut service = MailService::default();
        service.send_email(|email| {
            email.from("Alice").to("Bob").subject("Hello").body("Hi there!");
        });

        let sent = &service.outbox()[0];
        assert_eq!(sent.from, "Alice");
        assert_eq!(sent.to, "Bob");
        assert_eq!(sent.subject, "Hello");
        assert_eq!(sent.body, "Hi there!");
    }

    #[test]
    fn fields_not_set_in_the_closure_stay_default() {
        let mut service = MailService::default();
        service.send_email(|email| {
            email.from("Alice").to("Carol");
        });

        let sent = &service.outbox()[0];
        assert_eq!(sent.subject, "");
        assert_eq!(sent.body, "");
    }

    #[test]
    fn an_empty_closure_sends_an_all_default_email() {
        let mut service = MailService::default();
        service.send_email(|_| {});
        assert_eq!(service.outbox()[0], Email::default());
    }

    #[test]
    fn each_send_gets_a_fresh_builder() {
        let mut service = MailService::default();
        service.send_email(|email| {
            email.from("Alice");
        });
        service.send_email(|email| {
            email.to("Bob");
        });

        assert_eq!(service.outbox().len(), 2);
        // The second email must not inherit fields from the first.
        assert_eq!(service.outbox()[1].from, "");
        assert_eq!(service.outbox()[1].to, "Bob");
    }

    #[test]
    fn last_write_wins_inside_the_closure() {
        let mut service = MailService::default();
        service.send_email(|email| {
            email.subject("draft").subject("final");
        });
        assert_eq!(service.outbox()[0].subject, "final");
    }
}
