use strum_macros::{Display, EnumIter};

const BASE_TEMPLATE: &str = r#"
<!DOCTYPE html>
<html lang="en">

<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{> page_title}}</title>
    <link rel="stylesheet" href="{{root}}styles.css">
    <script src="/components/theme.js"></script>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
</head>

<body>
    <div hx-get="/components/navbar.html" hx-trigger="load" hx-swap="outerHTML"></div>
    {{> filling}}
</body>

</html>
"#;

const POST_TEMPLATE: &str = r#"
{{#*inline "page_title"}}{{post.title}} - {{site_title}}{{/inline}}
{{#*inline "filling"}}
    <div class="blog-page">
        <div class="blog-post">
            <h1>{{post.title}}</h1>
            <date class="post-content">{{post.date}}</date>

            <img src="{{post.image_url}}" alt="{{post.title}} Screenshot" class="featured-image">
            <div class="post-content">
                <h2>Description</h2>
                <p>{{post.description}}</p>
                {{#if post.external_links}}
                <div class="cta-section">
                    <h2>External Links</h2>
                    {{#each post.external_links}}
                    <a href="{{this}}" class="cta-button" target="_blank" rel="noopener noreferrer">View Resource</a>
                    {{/each}}
                </div>
                {{/if}}
            </div>
        </div>
    </div>
{{/inline}}
{{> base}}
"#;

const INDEX_TEMPLATE: &str = r#"
{{#*inline "page_title"}}{{site_title}}{{/inline}}
{{#*inline "filling"}}
    <main>
        <section class="featured-post">
            <h1>Latest Post</h1>
            <article class="post-card featured">
                <div class="highlighted-image">
                    <img src="{{featured_post.image_url}}" alt="{{featured_post.title}} Screenshot">
                    <span class="date">{{featured_post.date}}</span>
                </div>
                <h2>{{featured_post.title}}</h2>
                <p>{{featured_post.description}}</p>
                <a href="/{{featured_post.category}}/{{featured_post.slug}}.html" class="read-more" aria-label="Read more about {{featured_post.title}}">READ MORE</a>
            </article>
        </section>

        <section class="latest-posts">
            <h2>Recent Posts</h2>
            <div class="posts-grid">
                {{#each recent_posts}}
                {{> card heading="h3"}}
                {{/each}}
            </div>
        </section>

        <div class="view-all-posts">
            <a href="/posts/index.html" class="read-more">VIEW ALL POSTS</a>
        </div>
    </main>
{{/inline}}
{{> base}}
"#;

const POSTS_TEMPLATE: &str = r#"
{{#*inline "page_title"}}All Posts - {{site_title}}{{/inline}}
{{#*inline "filling"}}
    <main class="featured-post">
        <h1>All Posts</h1>
        <div class="posts-grid">
            {{#each posts}}
            {{> card heading="h2"}}
            {{/each}}
        </div>
    </main>
{{/inline}}
{{> base}}
"#;

const CARD_TEMPLATE: &str = r#"
<article class="post-card">
    <div class="post-image">
        <img src="{{image_url}}" alt="{{title}} Screenshot">
        <span class="date">{{date}}</span>
    </div>
    <{{heading}}>{{title}}</{{heading}}>
    <p>{{description}}</p>
    <a href="/{{category}}/{{slug}}.html" class="read-more" aria-label="Read more about {{title}}">READ MORE</a>
</article>
"#;

#[derive(EnumIter, Display, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum TemplateName {
    Base,
    Post,
    Index,
    Posts,
    Card,
}

impl TemplateName {
    pub fn template_str(&self) -> &'static str {
        match self {
            TemplateName::Base => BASE_TEMPLATE,
            TemplateName::Post => POST_TEMPLATE,
            TemplateName::Index => INDEX_TEMPLATE,
            TemplateName::Posts => POSTS_TEMPLATE,
            TemplateName::Card => CARD_TEMPLATE,
        }
    }
}
