use html5gum::StartTag;

pub(crate) fn start_tag(tag: &StartTag) -> String {
    let mut out = String::from("<");
    out.push_str(&String::from_utf8_lossy(&tag.name));

    for (name, value) in &tag.attributes {
        out.push(' ');
        out.push_str(&String::from_utf8_lossy(name));
        out.push_str("=\"");
        escape_into(&mut out, &String::from_utf8_lossy(value));
        out.push('"');
    }

    if tag.self_closing {
        out.push('/');
    }
    out.push('>');
    out
}

pub(crate) fn end_tag(name: &str) -> String {
    format!("</{name}>")
}

pub(crate) fn comment(text: &str) -> String {
    format!("<!--{text}-->")
}

pub(crate) fn doctype(name: &str) -> String {
    format!("<!DOCTYPE {name}>")
}

fn escape_into(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(c),
        }
    }
}
