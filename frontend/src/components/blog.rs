use yew::prelude::*;
use yew_router::prelude::*;

use crate::data::blog::{latest, BlogPost};
use crate::Route;

const HOME_POSTS: usize = 3;

#[derive(Properties, PartialEq)]
struct BlogCardProps {
    post: &'static BlogPost,
}

#[function_component(BlogCard)]
fn blog_card(props: &BlogCardProps) -> Html {
    let post = props.post;
    html! {
        <article class="blog-card">
            <img class="blog-image" src={post.image} alt={post.title} loading="lazy" />
            <div class="blog-body">
                <span class="blog-category">{post.category}</span>
                <h3 class="blog-title">{post.title}</h3>
                <p class="blog-excerpt">{post.excerpt}</p>
                <div class="blog-meta">
                    <span>{post.author}</span>
                    <span>{post.display_date()}</span>
                    <span>{post.read_time}</span>
                </div>
                <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }} classes="blog-read-more">
                    {"Leer más"}
                </Link<Route>>
            </div>
        </article>
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    html! {
        <section id="blog" class="blog">
            <h2 class="section-title gradient-text">{"Blog"}</h2>
            <p class="section-subtitle">{"Ideas, aprendizajes y opiniones del equipo"}</p>
            <div class="blog-grid">
                { for latest(HOME_POSTS).into_iter().map(|post| html! { <BlogCard key={post.id} {post} /> }) }
            </div>
        </section>
    }
}
