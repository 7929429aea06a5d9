use amia_demo_request::DemoRequest;
use amia_demo_request::email::{html_body, subject};

fn request() -> DemoRequest {
    DemoRequest {
        name: "Ana Torres".to_owned(),
        email: "ana@example.com".to_owned(),
        company_size: "201-500".to_owned(),
        country: "co".to_owned(),
        industry: "healthcare".to_owned(),
    }
}

#[test]
fn body_lists_exactly_the_collected_fields() {
    let html = html_body(&request());

    assert_eq!(html.matches("<li>").count(), 5);
    for line in [
        "<li><strong>Nombre:</strong> Ana Torres</li>",
        "<li><strong>Email:</strong> ana@example.com</li>",
        "<li><strong>Tamaño de empresa:</strong> 201-500</li>",
        "<li><strong>País:</strong> co</li>",
        "<li><strong>Industria:</strong> healthcare</li>",
    ] {
        assert!(html.contains(line), "missing {line} in {html}");
    }
    assert!(html.starts_with("<h1>Nueva solicitud de demo</h1>"));
    assert!(html.contains("contacta al cliente"));
}

#[test]
fn markup_in_fields_is_escaped() {
    let hostile = DemoRequest {
        name: "<script>alert('x')</script>".to_owned(),
        industry: "R&D \"labs\"".to_owned(),
        ..request()
    };
    let html = html_body(&hostile);

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("R&amp;D &quot;labs&quot;"));
}

#[test]
fn subject_carries_the_name() {
    assert_eq!(subject(&request()), "Nueva solicitud de demo de Ana Torres");
}

#[cfg(feature = "server")]
#[test]
fn composed_message_replies_to_the_prospect() {
    let message = amia_demo_request::email::compose(
        &request(),
        "AMIA Demo Request <onboarding@resend.dev>",
        "sales@example.com",
    );
    assert_eq!(message.to, vec!["sales@example.com".to_owned()]);
    assert_eq!(message.reply_to.as_deref(), Some("ana@example.com"));
    assert_eq!(message.subject, subject(&request()));
}
