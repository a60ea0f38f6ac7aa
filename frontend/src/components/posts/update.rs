//! Update logic for the posts board.
//!
//! Every write follows the same path: build a `BoardWrite` from the board,
//! send it to its collection, and on success settle the edit sessions and
//! reload both collections. The board itself is never patched optimistically,
//! so a failed write leaves it exactly as it was.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use common::source::BoardWrite;
use common::CatalogError;

use super::messages::{Msg, PostField};
use super::state::{PostForm, PostsComponent};
use crate::components::helpers::{confirm, report, show_toast};

pub fn update(component: &mut PostsComponent, ctx: &Context<PostsComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            component.load_seq += 1;
            component.loading = true;
            let seq = component.load_seq;
            let sources = component.sources.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = sources.fetch().await;
                link.send_message(Msg::Loaded { seq, result });
            });
            true
        }

        Msg::Loaded { seq, result } => {
            if seq != component.load_seq {
                log::debug!("dropping stale load #{} (latest #{})", seq, component.load_seq);
                return false;
            }
            component.loading = false;
            match result {
                Ok((posts, comments)) => {
                    log::info!("loaded {} posts, {} comments", posts.len(), comments.len());
                    component.load_error = None;
                    component.board.load(posts, comments);
                }
                Err(error) => {
                    log::error!("failed to load posts: {}", error);
                    component.load_error = Some(error.to_string());
                }
            }
            true
        }

        Msg::Intent(intent) => {
            if intent.is_mutation() {
                log::warn!("post writes go through the data source, ignoring {:?}", intent);
                return false;
            }
            match component.board.posts_mut().dispatch(intent) {
                Ok(()) => true,
                Err(error) => {
                    report(&error);
                    false
                }
            }
        }

        Msg::Escape => {
            if component.comment_form.is_some() {
                close_comment_form(component);
                true
            } else if component.post_form.is_some() {
                close_post_form(component);
                true
            } else {
                false
            }
        }

        Msg::NewPostField(field, value) => {
            set_field(&mut component.new_post, field, value);
            true
        }

        Msg::AddPost => {
            let draft = component.new_post.draft();
            submit(ctx, BoardWrite::create_post(&component.board, &draft).map(Some))
        }

        Msg::BeginEdit(id) => match component.board.posts_mut().begin_edit(&id) {
            Ok(post) => {
                let form = PostForm::edit(post);
                component.post_form = Some(form);
                true
            }
            Err(error) => {
                report(&error);
                false
            }
        },

        Msg::EditField(field, value) => match component.post_form.as_mut() {
            Some(form) => {
                set_field(form, field, value);
                true
            }
            None => false,
        },

        Msg::SaveEdit => {
            let Some(form) = component.post_form.as_ref() else {
                return false;
            };
            let draft = form.draft();
            submit(ctx, BoardWrite::save_post(&component.board, &draft).map(Some))
        }

        Msg::CancelEdit => {
            close_post_form(component);
            true
        }

        Msg::Delete(id) => {
            if !confirm("Soft delete this post?") {
                return false;
            }
            submit(ctx, BoardWrite::delete_post(&component.board, &id))
        }

        Msg::Restore(id) => {
            submit(ctx, BoardWrite::restore_post(&component.board, &id))
        }

        Msg::CommentInput(post_id, text) => {
            component.comment_inputs.insert(post_id, text);
            false
        }

        Msg::AddComment(post_id) => {
            let text = component
                .comment_inputs
                .get(&post_id)
                .map(|text| text.trim().to_string())
                .unwrap_or_default();
            submit(ctx, BoardWrite::add_comment(&component.board, &post_id, &text).map(Some))
        }

        Msg::BeginCommentEdit(id) => match component.board.begin_comment_edit(&id) {
            Ok(comment) => {
                let text = comment.text.clone();
                component.comment_form = Some(text);
                true
            }
            Err(error) => {
                report(&error);
                false
            }
        },

        Msg::CommentEditText(text) => match component.comment_form.as_mut() {
            Some(current) => {
                *current = text;
                true
            }
            None => false,
        },

        Msg::SaveComment => {
            let Some(text) = component.comment_form.as_ref() else {
                return false;
            };
            submit(ctx, BoardWrite::save_comment(&component.board, text.trim()).map(Some))
        }

        Msg::CancelCommentEdit => {
            close_comment_form(component);
            true
        }

        Msg::DeleteComment(id) => {
            if !confirm("Soft delete this comment?") {
                return false;
            }
            submit(ctx, BoardWrite::flag_comment(&component.board, &id, true))
        }

        Msg::RestoreComment(id) => {
            submit(ctx, BoardWrite::flag_comment(&component.board, &id, false))
        }

        Msg::Submit(write) => {
            component.saving = true;
            let sources = component.sources.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = sources.apply(&write).await;
                link.send_message(Msg::Written { write, result });
            });
            true
        }

        Msg::Written { write, result } => {
            component.saving = false;
            match result {
                Ok(()) => {
                    finish_write(component, &write);
                    if let Some(notice) = write.notice() {
                        show_toast(notice);
                    }
                    ctx.link().send_message(Msg::Load);
                }
                Err(error) => {
                    log::error!("write failed: {}", error);
                    report(&error);
                }
            }
            true
        }
    }
}

/// Queues a validated write, or reports why it could not be built. `None`
/// means the record is already in the requested state.
fn submit(ctx: &Context<PostsComponent>, write: Result<Option<BoardWrite>, CatalogError>) -> bool {
    match write {
        Ok(Some(write)) => {
            ctx.link().send_message(Msg::Submit(write));
            false
        }
        Ok(None) => false,
        Err(error) => {
            report(&error);
            false
        }
    }
}

/// Settles the board, then drops the form state the write made obsolete.
fn finish_write(component: &mut PostsComponent, write: &BoardWrite) {
    write.settle(&mut component.board);
    match write {
        BoardWrite::CreatePost(_) => component.new_post = PostForm::new_post(),
        BoardWrite::CreateComment(comment) => {
            component.comment_inputs.remove(&comment.post_id);
        }
        _ => {}
    }
    if component.board.posts().edit_session().target().is_none() {
        component.post_form = None;
    }
    if component.board.comment_edit_session().target().is_none() {
        component.comment_form = None;
    }
}

fn close_post_form(component: &mut PostsComponent) {
    component.post_form = None;
    component.board.posts_mut().cancel_edit();
}

fn close_comment_form(component: &mut PostsComponent) {
    component.comment_form = None;
    component.board.cancel_comment_edit();
}

fn set_field(form: &mut PostForm, field: PostField, value: String) {
    match field {
        PostField::Title => form.title = value,
        PostField::Views => form.views = value,
    }
}
