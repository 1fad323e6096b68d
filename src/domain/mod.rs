mod recipient_email;
mod submission;

pub use recipient_email::RecipientEmail;
pub use submission::{FormData, Submission, ValidationError};
