//! HTML templates for the dashboard.
//!
//! Uses a simple template approach with Tailwind CSS and plain HTML forms.

/// Navigation entries: (path, label, icon).
pub const NAV_ITEMS: [(&str, &str, &str); 5] = [
    ("/", "Camera Dashboard", "video"),
    ("/review", "Human Review Board", "user-check"),
    ("/logs", "System Logs", "scroll"),
    ("/complaints", "User Complaint Portal", "comment-dots"),
    ("/complaints/review", "Complaint Review", "gavel"),
];

/// Base HTML layout wrapper.
pub fn layout(title: &str, active: &str, operator: &str, content: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - FaceABC</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <script>
        tailwind.config = {{
            theme: {{
                extend: {{
                    colors: {{
                        primary: {{
                            50: '#eef2ff',
                            100: '#e0e7ff',
                            500: '#6366f1',
                            600: '#4f46e5',
                            700: '#4338ca',
                            900: '#312e81',
                        }}
                    }}
                }}
            }}
        }}
    </script>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
</head>
<body class="bg-gray-50 min-h-screen">
    {NAV}

    <div class="flex">
        {SIDEBAR}

        <main class="flex-1 p-6 lg:p-8">
            <div class="max-w-6xl mx-auto">
                {content}
            </div>
        </main>
    </div>
</body>
</html>"##,
        title = html_escape(title),
        NAV = nav_template(),
        SIDEBAR = sidebar_template(active, operator),
    )
}

fn nav_template() -> &'static str {
    r##"<nav class="bg-primary-600 text-white px-4 py-3 sticky top-0 z-50 shadow-lg">
        <div class="flex items-center justify-between">
            <a href="/" class="flex items-center gap-2">
                <i class="fas fa-eye"></i>
                <span class="font-semibold">FaceABC</span>
                <span class="text-sm bg-primary-500 px-2 py-1 rounded">Ethical Facial Recognition</span>
            </a>
            <span class="hidden md:flex items-center gap-1 text-sm">
                <span class="w-2 h-2 bg-green-400 rounded-full animate-pulse"></span>
                Simulation
            </span>
        </div>
    </nav>"##
}

fn sidebar_template(active: &str, operator: &str) -> String {
    let links: String = NAV_ITEMS
        .iter()
        .map(|(href, label, icon)| {
            let highlight = if *href == active {
                "bg-primary-50 text-primary-600"
            } else {
                "text-gray-700"
            };
            format!(
                r##"<a href="{href}" class="flex items-center gap-3 px-4 py-3 {highlight} hover:bg-primary-50 rounded-lg transition-colors">
                    <i class="fas fa-{icon} w-5"></i>
                    <span>{label}</span>
                </a>"##
            )
        })
        .collect();

    format!(
        r##"<aside class="w-64 bg-white border-r border-gray-200 min-h-[calc(100vh-56px)]">
            <nav class="p-4 space-y-2">
                <div class="pb-2 px-4 text-xs font-semibold text-gray-400 uppercase tracking-wider">Go to</div>
                {links}
            </nav>
            <div class="mx-4 mt-4 p-3 bg-blue-50 text-blue-800 text-sm rounded-lg border-t border-gray-200">
                Logged in as: <strong>{operator}</strong>
            </div>
        </aside>"##,
        operator = html_escape(operator),
    )
}

/// Page heading with a subtitle.
pub fn page_header(title: &str, subtitle: &str) -> String {
    format!(
        r##"<div class="mb-6">
            <h1 class="text-2xl font-bold text-gray-900">{title}</h1>
            <p class="text-gray-600">{subtitle}</p>
        </div>"##
    )
}

/// Card component.
pub fn card(title: &str, content: &str) -> String {
    format!(
        r##"<div class="bg-white rounded-xl shadow-sm border border-gray-200 overflow-hidden">
            <div class="px-6 py-4 border-b border-gray-200">
                <h3 class="text-lg font-semibold text-gray-900">{title}</h3>
            </div>
            <div class="p-6">
                {content}
            </div>
        </div>"##
    )
}

/// Stats card component.
pub fn stats_card(title: &str, value: &str, icon: &str, color: &str) -> String {
    format!(
        r##"<div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm text-gray-500">{title}</p>
                    <p class="text-2xl font-bold text-gray-900 mt-1">{value}</p>
                </div>
                <div class="w-12 h-12 rounded-full bg-{color}-100 flex items-center justify-center">
                    <i class="fas fa-{icon} text-{color}-500 text-xl"></i>
                </div>
            </div>
        </div>"##
    )
}

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Info,
    Warning,
    Error,
}

impl Tone {
    fn color(self) -> &'static str {
        match self {
            Tone::Success => "green",
            Tone::Info => "blue",
            Tone::Warning => "yellow",
            Tone::Error => "red",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Success => "check-circle",
            Tone::Info => "info-circle",
            Tone::Warning => "exclamation-triangle",
            Tone::Error => "times-circle",
        }
    }
}

/// Inline notice banner. The message is escaped.
pub fn notice(tone: Tone, message: &str) -> String {
    let color = tone.color();
    format!(
        r##"<div class="flex items-center gap-3 p-4 mb-4 rounded-lg bg-{color}-50 border border-{color}-200 text-{color}-800">
            <i class="fas fa-{icon}"></i>
            <span>{message}</span>
        </div>"##,
        icon = tone.icon(),
        message = html_escape(message),
    )
}

/// Badge component.
pub fn badge(text: &str, color: &str) -> String {
    format!(
        r##"<span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-{color}-100 text-{color}-800">{text}</span>"##
    )
}

/// Horizontal bar for a value in [0, 1].
pub fn progress(value: f64, color: &str) -> String {
    let pct = (value.clamp(0.0, 1.0) * 100.0).round();
    format!(
        r##"<div class="w-full bg-gray-200 rounded-full h-3">
            <div class="bg-{color}-500 h-3 rounded-full" style="width: {pct}%"></div>
        </div>"##
    )
}

/// Table component. Cells are inserted as-is; escape user data beforehand.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let headers_html: String = headers
        .iter()
        .map(|h| format!(r#"<th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{h}</th>"#))
        .collect();

    let rows_html: String = rows
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|cell| format!(r#"<td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{cell}</td>"#))
                .collect();
            format!(r#"<tr class="hover:bg-gray-50">{cells}</tr>"#)
        })
        .collect();

    format!(
        r##"<div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>{headers_html}</tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    {rows_html}
                </tbody>
            </table>
        </div>"##
    )
}

/// Text input component.
pub fn input(name: &str, label: &str, value: &str, placeholder: &str) -> String {
    format!(
        r##"<div class="space-y-1">
            <label for="{name}" class="block text-sm font-medium text-gray-700">{label}</label>
            <input type="text" name="{name}" id="{name}" value="{value}" placeholder="{placeholder}"
                   class="w-full px-4 py-2 border border-gray-300 rounded-lg bg-white text-gray-900 focus:ring-2 focus:ring-primary-500 focus:border-primary-500">
        </div>"##,
        value = html_escape(value),
    )
}

/// Textarea component.
pub fn textarea(name: &str, label: &str, value: &str) -> String {
    format!(
        r##"<div class="space-y-1">
            <label for="{name}" class="block text-sm font-medium text-gray-700">{label}</label>
            <textarea name="{name}" id="{name}" rows="4"
                      class="w-full px-4 py-2 border border-gray-300 rounded-lg bg-white text-gray-900 focus:ring-2 focus:ring-primary-500 focus:border-primary-500">{value}</textarea>
        </div>"##,
        value = html_escape(value),
    )
}

/// Radio group: (value, label, checked).
pub fn radio_group(name: &str, legend: &str, options: &[(&str, &str, bool)]) -> String {
    let options_html: String = options
        .iter()
        .map(|(value, label, checked)| {
            let checked = if *checked { "checked" } else { "" };
            format!(
                r##"<label class="flex items-center gap-2 text-gray-700">
                    <input type="radio" name="{name}" value="{value}" {checked} required>
                    <span>{label}</span>
                </label>"##
            )
        })
        .collect();

    format!(
        r##"<fieldset class="space-y-2">
            <legend class="text-sm font-medium text-gray-700 mb-1">{legend}</legend>
            {options_html}
        </fieldset>"##
    )
}

/// Submit button component.
pub fn submit_button(text: &str, icon: &str, variant: &str) -> String {
    let (bg, hover) = match variant {
        "danger" => ("bg-red-600", "hover:bg-red-700"),
        "success" => ("bg-green-600", "hover:bg-green-700"),
        _ => ("bg-primary-600", "hover:bg-primary-700"),
    };
    format!(
        r##"<button type="submit" class="{bg} {hover} text-white px-4 py-2 rounded-lg font-medium transition-colors">
            <i class="fas fa-{icon} mr-2"></i>{text}
        </button>"##
    )
}

/// Empty state component.
pub fn empty_state(icon: &str, title: &str, description: &str, action: Option<(&str, &str)>) -> String {
    let action_html = action.map_or(String::new(), |(text, href)| {
        format!(r##"<a href="{href}" class="mt-4 inline-flex items-center gap-2 bg-primary-600 hover:bg-primary-700 text-white px-4 py-2 rounded-lg font-medium transition-colors">
            <i class="fas fa-arrow-right"></i> {text}
        </a>"##)
    });

    format!(
        r##"<div class="text-center py-12">
            <i class="fas fa-{icon} text-4xl text-gray-400 mb-4"></i>
            <h3 class="text-lg font-medium text-gray-900">{title}</h3>
            <p class="mt-1 text-gray-500">{description}</p>
            {action_html}
        </div>"##
    )
}

/// HTML escape a string.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_layout_highlights_active_page() {
        let html = layout("System Logs", "/logs", "Staff – Mike", "<p>body</p>");
        assert!(html.contains("<title>System Logs - FaceABC</title>"));
        assert!(html.contains(r#"href="/logs" class="flex items-center gap-3 px-4 py-3 bg-primary-50"#));
        assert!(html.contains("Logged in as: <strong>Staff – Mike</strong>"));
        for (_, label, _) in NAV_ITEMS {
            assert!(html.contains(label));
        }
    }

    #[test]
    fn test_notice_escapes_message() {
        let html = notice(Tone::Warning, "<b>hi</b>");
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
        assert!(html.contains("bg-yellow-50"));
    }

    #[test]
    fn test_progress_clamps() {
        assert!(progress(1.7, "green").contains("width: 100%"));
        assert!(progress(0.424, "red").contains("width: 42%"));
    }
}
