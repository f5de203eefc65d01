use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::{Entrance, Reveal, Transition};
use crate::data::blog::{post_by_slug, related, BlogPost as Post};
use crate::Route;

pub fn twitter_share_url(title: &str, url: &str) -> String {
    format!(
        "https://twitter.com/intent/tweet?text={}&url={}",
        urlencoding::encode(title),
        urlencoding::encode(url)
    )
}

pub fn linkedin_share_url(url: &str) -> String {
    format!(
        "https://www.linkedin.com/sharing/share-offsite/?url={}",
        urlencoding::encode(url)
    )
}

fn current_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

fn related_posts(post: &Post) -> Html {
    let posts = related(post, 2);
    if posts.is_empty() {
        return html! {};
    }
    html! {
        <aside class="related-posts">
            <h4>{"Artículos relacionados"}</h4>
            { for posts.into_iter().map(|other| html! {
                <Link<Route> key={other.id} to={Route::BlogPost { slug: other.slug.to_string() }} classes="related-link">
                    {other.title}
                </Link<Route>>
            }) }
        </aside>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub slug: String,
}

#[function_component(BlogPost)]
pub fn blog_post(props: &BlogPostProps) -> Html {
    let content = use_node_ref();
    let post = post_by_slug(&props.slug);

    {
        let content = content.clone();
        use_effect_with_deps(
            move |post: &Option<&'static Post>| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                if let (Some(post), Some(el)) = (post, content.cast::<web_sys::Element>()) {
                    el.set_inner_html(post.content);
                }
                || ()
            },
            post,
        );
    }

    let Some(post) = post else {
        debug!("No blog post for slug '{}'", props.slug);
        return html! {
            <div class="blog-not-found">
                <h1>{"Artículo no encontrado"}</h1>
                <p>{"El artículo que buscas no existe o ha sido eliminado."}</p>
                <Link<Route> to={Route::Home} classes="back-button">{"← Volver al inicio"}</Link<Route>>
            </div>
        };
    };

    let url = current_url();
    html! {
        <div class="blog-post">
            <Link<Route> to={Route::Home} classes="back-button">{"← Volver al blog"}</Link<Route>>
            <Reveal entrance={Entrance::default()} transition={Transition { duration_ms: 600, ..Transition::default() }}>
                <header class="post-header">
                    <img class="post-image" src={post.image} alt={post.title} />
                    <span class="category-tag">{post.category}</span>
                    <h1 class="post-title">{post.title}</h1>
                    <p class="post-excerpt">{post.excerpt}</p>
                    <div class="post-meta">
                        <span>{post.author}</span>
                        <span>{post.display_date()}</span>
                        <span>{post.read_time}</span>
                    </div>
                    <div class="post-tags">
                        { for post.tags.iter().map(|tag| html! { <span class="tag">{format!("#{}", tag)}</span> }) }
                    </div>
                </header>
                <div class="post-content" ref={content}></div>
                <footer class="post-footer">
                    <h4>{"Compartir artículo:"}</h4>
                    <a class="share-button" href={twitter_share_url(post.title, &url)} target="_blank" rel="noopener noreferrer">
                        {"Twitter"}
                    </a>
                    <a class="share-button" href={linkedin_share_url(&url)} target="_blank" rel="noopener noreferrer">
                        {"LinkedIn"}
                    </a>
                </footer>
                { related_posts(post) }
            </Reveal>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_links_encode_title_and_url() {
        let url = "https://surcode.dev/blog/mobile-first?ref=a&b";
        assert_eq!(
            twitter_share_url("¿Sigue existiendo?", url),
            "https://twitter.com/intent/tweet?text=%C2%BFSigue%20existiendo%3F&url=https%3A%2F%2Fsurcode.dev%2Fblog%2Fmobile-first%3Fref%3Da%26b"
        );
        assert!(linkedin_share_url(url).ends_with("url=https%3A%2F%2Fsurcode.dev%2Fblog%2Fmobile-first%3Fref%3Da%26b"));
    }
}
