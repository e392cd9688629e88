//! Minimal HTML page wrapper for rendered table fragments.

use tabweavelib::markup::node::escape_text;

/// Wrap an HTML fragment in a complete page
pub fn wrap(title: &str, fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{}</title>\n\
         </head>\n\
         <body>\n\
         {}\n\
         </body>\n\
         </html>",
        escape_text(title),
        fragment
    )
}
