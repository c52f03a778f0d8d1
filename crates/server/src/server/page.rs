//! Server-side rendering of the resource page.

use crate::models::resource::Resource;
use crate::models::seed::{missing_seeds, SeedResource};

pub const PAGE_TITLE: &str = "Linkboard";
pub const PAGE_DESCRIPTION: &str = "A shared list of useful links, stored in SQLite.";

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Renders the full page for `resources`, which must already be in id order.
pub fn render_index(resources: &[Resource]) -> String {
    let mut html = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{}</title>\n\
         <meta name=\"description\" content=\"{}\">\n\
         </head>\n\
         <body>\n\
         <div style=\"font-family: system-ui, sans-serif; line-height: 1.8\">\n\
         <h1>Welcome to {}</h1>\n",
        escape_html(PAGE_TITLE),
        escape_html(PAGE_DESCRIPTION),
        escape_html(PAGE_TITLE),
    );
    render_resource_list(&mut html, resources);
    render_add_form(&mut html);
    for seed in missing_seeds(resources) {
        render_seed_form(&mut html, seed);
    }
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_resource_list(html: &mut String, resources: &[Resource]) {
    html.push_str("<ul>\n");
    for resource in resources {
        html.push_str(&format!(
            "<li><a target=\"_blank\" href=\"{}\" rel=\"noreferrer\">{}</a></li>\n",
            escape_html(&resource.href),
            escape_html(&resource.title),
        ));
    }
    html.push_str("</ul>\n");
}

fn render_add_form(html: &mut String) {
    html.push_str(
        "<form method=\"post\" action=\"/\">\n\
         <div><label>Title: <input type=\"text\" name=\"title\" required></label></div>\n\
         <div><label>URL: <input type=\"url\" name=\"href\" required></label></div>\n\
         <button type=\"submit\">Add Resource</button>\n\
         </form>\n",
    );
}

fn render_seed_form(html: &mut String, seed: SeedResource) {
    html.push_str(&format!(
        "<form method=\"post\" action=\"/\" data-seed=\"{}\">\n\
         <input type=\"hidden\" name=\"title\" value=\"{}\">\n\
         <input type=\"hidden\" name=\"href\" value=\"{}\">\n\
         <button type=\"submit\">{}</button>\n\
         </form>\n",
        seed,
        escape_html(seed.title()),
        escape_html(seed.href()),
        escape_html(seed.button_label()),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(id: i64, title: &str, href: &str) -> Resource {
        Resource {
            id,
            title: title.to_string(),
            href: href.to_string(),
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html("<a href=\"x\">Tom & 'Jerry'</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn empty_list_offers_both_seeds() {
        let html = render_index(&[]);
        assert!(html.contains("<ul>\n</ul>"));
        assert!(html.contains("Add Resource"));
        assert!(html.contains("Add Cloudflare Docs"));
        assert!(html.contains("Add Vite Docs"));
    }

    #[test]
    fn lists_links_in_given_order() {
        let html = render_index(&[
            resource(1, "First", "https://first.example"),
            resource(2, "Second", "https://second.example"),
        ]);
        let first = html.find("https://first.example").unwrap();
        let second = html.find("https://second.example").unwrap();
        assert!(first < second);
        assert!(html.contains(
            "<li><a target=\"_blank\" href=\"https://first.example\" rel=\"noreferrer\">First</a></li>"
        ));
    }

    #[test]
    fn hides_seed_form_once_present() {
        let html = render_index(&[resource(
            1,
            "Cloudflare Pages Docs - Remix guide",
            SeedResource::CloudflareDocs.href(),
        )]);
        assert!(!html.contains("Add Cloudflare Docs"));
        assert!(html.contains("Add Vite Docs"));
    }

    #[test]
    fn seed_form_carries_hidden_fields() {
        let html = render_index(&[]);
        assert!(html.contains(
            "<input type=\"hidden\" name=\"href\" value=\"https://remix.run/docs/en/main/future/vite#cloudflare\">"
        ));
        assert!(html.contains(
            "<input type=\"hidden\" name=\"title\" value=\"Remix Cloudflare Docs\">"
        ));
    }

    #[test]
    fn user_content_is_escaped() {
        let html = render_index(&[resource(1, "<script>alert(1)</script>", "\" onclick=\"x")]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("href=\"&quot; onclick=&quot;x\""));
    }
}
