//! Client side of the contact form: submits the form to the backend and
//! builds the direct contact links shown next to it.

pub use api::{ContactApi, ContactApiResponse, ContactForm, HttpContactApi};
pub use channels::DirectChannels;
pub use form::{ContactFormController, SubmissionStatus};

mod api;
mod channels;
mod form;
