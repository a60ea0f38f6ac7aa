//! View rendering for the posts board: new-post bar, list controls, post
//! cards with their comments, pagination, and the two edit sheets.

use yew::html::Scope;
use yew::prelude::*;

use common::catalog::Intent;
use common::model::{Comment, Post};
use common::CatalogView;

use super::messages::{Msg, PostField};
use super::state::PostsComponent;
use crate::components::controls::{
    page_size_select, pagination, search_box, sort_select, PaginationCallbacks,
};
use crate::components::helpers::{
    format_count, input_value, load_indicator, refreshing_banner, textarea_value, LoadIndicator,
};
use crate::components::sheet::Sheet;

pub fn view(component: &PostsComponent, ctx: &Context<PostsComponent>) -> Html {
    let link = ctx.link();
    let snapshot = component.board.posts().snapshot();

    html! {
        <div class="posts-root">
            { build_new_post(component, link) }
            { build_controls(&snapshot, link) }
            { build_content(component, &snapshot, link) }
            { pagination(snapshot.page, snapshot.total_pages, PaginationCallbacks {
                previous: link.callback(|_| Msg::Intent(Intent::PreviousPage)),
                next: link.callback(|_| Msg::Intent(Intent::NextPage)),
                go_to: link.callback(|page| Msg::Intent(Intent::GoToPage(page))),
            }) }
            { build_post_sheet(component, link) }
            { build_comment_sheet(component, link) }
        </div>
    }
}

fn build_new_post(component: &PostsComponent, link: &Scope<PostsComponent>) -> Html {
    let on_title =
        link.callback(|e: InputEvent| Msg::NewPostField(PostField::Title, input_value(&e)));
    let on_views =
        link.callback(|e: InputEvent| Msg::NewPostField(PostField::Views, input_value(&e)));

    html! {
        <div class="add-post-form">
            <input
                type="text"
                placeholder="Post title"
                value={component.new_post.title.clone()}
                oninput={on_title}
            />
            <input
                type="number"
                min="0"
                value={component.new_post.views.clone()}
                oninput={on_views}
            />
            <button disabled={component.saving} onclick={link.callback(|_| Msg::AddPost)}>
                { "Add Post" }
            </button>
        </div>
    }
}

fn build_controls(snapshot: &CatalogView<'_, Post>, link: &Scope<PostsComponent>) -> Html {
    html! {
        <div class="controls">
            { search_box(
                snapshot.filter_term,
                "Search posts...",
                link.callback(|term| Msg::Intent(Intent::Search(term))),
            ) }
            { sort_select(
                snapshot.sort_key,
                "Views",
                link.callback(|key| Msg::Intent(Intent::Sort(key))),
            ) }
            { page_size_select(
                snapshot.page_size,
                link.callback(|size| Msg::Intent(Intent::SetPageSize(size))),
            ) }
        </div>
    }
}

fn build_content(
    component: &PostsComponent,
    snapshot: &CatalogView<'_, Post>,
    link: &Scope<PostsComponent>,
) -> Html {
    let indicator = load_indicator(component.loading, snapshot.is_store_empty());
    if indicator == LoadIndicator::FullArea {
        return html! { <div class="loading">{ "Loading posts..." }</div> };
    }
    let reloading = refreshing_banner(indicator);
    if let Some(error) = &component.load_error {
        return html! {
            <div class="error">
                { reloading }
                <p>{ format!("Could not load posts: {}", error) }</p>
                <button onclick={link.callback(|_| Msg::Load)}>{ "Retry" }</button>
            </div>
        };
    }
    if snapshot.is_store_empty() {
        return html! { <div class="empty">{ "No posts yet." }</div> };
    }
    if snapshot.is_filtered_out() {
        return html! {
            <>
                { reloading }
                <div class="empty">{ "No posts match your search." }</div>
            </>
        };
    }

    html! {
        <>
            { reloading }
            <div class="posts-list">
                { for snapshot.items.iter().map(|post| build_post(component, snapshot, post, link)) }
            </div>
        </>
    }
}

fn build_post(
    component: &PostsComponent,
    snapshot: &CatalogView<'_, Post>,
    post: &Post,
    link: &Scope<PostsComponent>,
) -> Html {
    let comment_count = component.board.active_comment_count(&post.id);
    let actions = if snapshot.offers_restore(post) {
        let id = post.id.clone();
        html! {
            <button class="btn-restore" disabled={component.saving}
                onclick={link.callback(move |_| Msg::Restore(id.clone()))}>
                { "Restore" }
            </button>
        }
    } else {
        let edit_id = post.id.clone();
        let delete_id = post.id.clone();
        html! {
            <>
                <button class="btn-edit" onclick={link.callback(move |_| Msg::BeginEdit(edit_id.clone()))}>
                    { "Edit" }
                </button>
                <button class="btn-delete" disabled={component.saving}
                    onclick={link.callback(move |_| Msg::Delete(delete_id.clone()))}>
                    { "Delete" }
                </button>
            </>
        }
    };

    html! {
        <div key={post.id.to_string()} class={classes!("post-item", post.is_deleted.then_some("deleted"))}>
            <div class="post-header">
                <h3 class="post-title">{ post.title.clone() }</h3>
                <span class="post-id">{ format!("#{}", post.id) }</span>
            </div>
            <div class="post-meta">
                <span>{ format!("{} views", format_count(post.views)) }</span>
                <span>{ format!("{} comments", comment_count) }</span>
            </div>
            <div class="post-actions">{ actions }</div>
            { build_comments(component, post, link) }
        </div>
    }
}

fn build_comments(component: &PostsComponent, post: &Post, link: &Scope<PostsComponent>) -> Html {
    let comments = component.board.comments_for(&post.id);
    let add_form = if post.is_deleted {
        html! {}
    } else {
        let input_id = post.id.clone();
        let add_id = post.id.clone();
        let current = component
            .comment_inputs
            .get(&post.id)
            .cloned()
            .unwrap_or_default();
        html! {
            <div class="add-comment-form">
                <input
                    type="text"
                    placeholder="Add a comment..."
                    value={current}
                    oninput={link.callback(move |e: InputEvent| {
                        Msg::CommentInput(input_id.clone(), input_value(&e))
                    })}
                />
                <button disabled={component.saving}
                    onclick={link.callback(move |_| Msg::AddComment(add_id.clone()))}>
                    { "Post" }
                </button>
            </div>
        }
    };

    html! {
        <div class="comments-section">
            <div class="comments-title">{ "Comments" }</div>
            if comments.is_empty() {
                <p class="no-comments">{ "No comments yet" }</p>
            }
            { for comments.into_iter().map(|comment| build_comment(component, comment, link)) }
            { add_form }
        </div>
    }
}

fn build_comment(component: &PostsComponent, comment: &Comment, link: &Scope<PostsComponent>) -> Html {
    let actions = if comment.is_deleted {
        let id = comment.id.clone();
        html! {
            <button class="btn-comment-restore" disabled={component.saving}
                onclick={link.callback(move |_| Msg::RestoreComment(id.clone()))}>
                { "Restore" }
            </button>
        }
    } else {
        let edit_id = comment.id.clone();
        let delete_id = comment.id.clone();
        html! {
            <>
                <button class="btn-comment-edit"
                    onclick={link.callback(move |_| Msg::BeginCommentEdit(edit_id.clone()))}>
                    { "Edit" }
                </button>
                <button class="btn-comment-delete" disabled={component.saving}
                    onclick={link.callback(move |_| Msg::DeleteComment(delete_id.clone()))}>
                    { "Delete" }
                </button>
            </>
        }
    };

    html! {
        <div key={comment.id.to_string()} class={classes!("comment-item", comment.is_deleted.then_some("deleted"))}>
            <p class="comment-text">{ comment.text.clone() }</p>
            <div class="comment-actions">{ actions }</div>
        </div>
    }
}

fn build_post_sheet(component: &PostsComponent, link: &Scope<PostsComponent>) -> Html {
    let Some(form) = component.post_form.as_ref() else {
        return html! {};
    };
    let on_title = link.callback(|e: InputEvent| Msg::EditField(PostField::Title, input_value(&e)));
    let on_views = link.callback(|e: InputEvent| Msg::EditField(PostField::Views, input_value(&e)));

    html! {
        <Sheet open={true} title="Edit Post" on_close={link.callback(|_| Msg::CancelEdit)}>
            <div class="edit-form">
                <label>{ "Title" }
                    <input type="text" value={form.title.clone()} oninput={on_title} />
                </label>
                <label>{ "Views" }
                    <input type="number" min="0" value={form.views.clone()} oninput={on_views} />
                </label>
                <div class="form-actions">
                    <button disabled={component.saving} onclick={link.callback(|_| Msg::SaveEdit)}>
                        { "Save" }
                    </button>
                    <button onclick={link.callback(|_| Msg::CancelEdit)}>{ "Cancel" }</button>
                </div>
            </div>
        </Sheet>
    }
}

fn build_comment_sheet(component: &PostsComponent, link: &Scope<PostsComponent>) -> Html {
    let Some(text) = component.comment_form.as_ref() else {
        return html! {};
    };
    let on_text = link.callback(|e: InputEvent| Msg::CommentEditText(textarea_value(&e)));

    html! {
        <Sheet open={true} title="Edit Comment" on_close={link.callback(|_| Msg::CancelCommentEdit)}>
            <div class="edit-form">
                <textarea value={text.clone()} oninput={on_text} />
                <div class="form-actions">
                    <button disabled={component.saving} onclick={link.callback(|_| Msg::SaveComment)}>
                        { "Save" }
                    </button>
                    <button onclick={link.callback(|_| Msg::CancelCommentEdit)}>{ "Cancel" }</button>
                </div>
            </div>
        </Sheet>
    }
}
