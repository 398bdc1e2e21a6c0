//! Built-in sample posts, shown when no manifest can be read

use crate::content::Post;

const SAMPLE_CONTENT: &str = r#"# Getting Started with Simple Web Development

In today's world of complex frameworks and build tools, it's easy to forget that the web was built on simple technologies. HTML, CSS, and JavaScript are still powerful tools that can create amazing websites.

## Why Simple is Better

When you use basic web technologies, you get several advantages:

* **Faster loading times** - No framework overhead
* **Better performance** - Smaller bundle sizes
* **Easier maintenance** - Less complexity to manage
* **Better SEO** - Search engines love simple HTML

## Getting Started

Here's a simple example of a responsive website structure:

```html
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>My Simple Website</title>
    <link rel="stylesheet" href="style.css">
</head>
<body>
    <header>
        <h1>Welcome</h1>
    </header>
    <main>
        <p>Hello, world!</p>
    </main>
</body>
</html>
```

## Next Steps

Start with the basics and add complexity only when needed. Your users will thank you for the fast, reliable experience!"#;

/// The fallback dataset. Its posts carry no pre-rendered HTML.
pub fn sample_posts() -> Vec<Post> {
    let title = "Getting Started with Simple Web Development";
    vec![Post {
        title: title.to_string(),
        date: "2024-01-15".to_string(),
        excerpt: "Learn how to build fast, simple websites using just HTML, CSS, and JavaScript. No frameworks required!".to_string(),
        content: SAMPLE_CONTENT.to_string(),
        html: String::new(),
        slug: slug::slugify(title),
    }]
}
