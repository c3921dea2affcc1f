//! Server-rendered pages. Templates are compiled into the binary and auto-escaped.

pub mod patient_page;
pub mod token_page;

use tera::Tera;

pub use patient_page::render_patient_page;
pub use token_page::render_token_page;

pub fn load_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("token.html", include_str!("../templates/token.html")),
        (
            "patient_register.html",
            include_str!("../templates/patient_register.html"),
        ),
    ])?;
    Ok(tera)
}
