use std::rc::Rc;

use folio_client::{FileKind, NewFile, Settings, UploadDraft, UploadedFile};
use yew::prelude::*;

use crate::{ui::Page, util};

#[derive(Clone, PartialEq, Properties)]
pub struct UploadProps {
    pub settings: Rc<Settings>,
    pub on_navigate: Callback<Page>,
}

pub enum UploadMsg {
    SetDragActive(bool),
    FilesPicked(Vec<NewFile>),
    RemoveFile(String),
    TitleChanged(String),
    DescriptionChanged(String),
    CategoryChanged(String),
    TagInputChanged(String),
    AddTag,
    RemoveTag(String),
    Submit,
    UploadAnother,
}

pub struct Upload {
    draft: UploadDraft,
    drag_active: bool,
}

impl Component for Upload {
    type Message = UploadMsg;
    type Properties = UploadProps;

    fn create(ctx: &Context<Self>) -> Self {
        Upload {
            draft: UploadDraft::new(ctx.props().settings.max_tags),
            drag_active: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            UploadMsg::SetDragActive(active) => {
                if self.drag_active == active {
                    return false;
                }
                self.drag_active = active;
            }
            UploadMsg::FilesPicked(files) => {
                self.drag_active = false;
                if files.is_empty() {
                    return true;
                }
                tracing::debug!(count = files.len(), "adding files to upload");
                self.draft
                    .add_files(chrono::Utc::now().timestamp_millis(), files);
            }
            UploadMsg::RemoveFile(id) => match self.draft.remove_file(&id) {
                Some(UploadedFile {
                    preview: Some(url), ..
                }) => util::revoke_preview(&url),
                Some(_) => (),
                None => return false,
            },
            UploadMsg::TitleChanged(t) => self.draft.title = t,
            UploadMsg::DescriptionChanged(d) => self.draft.description = d,
            UploadMsg::CategoryChanged(c) => self.draft.category = c,
            UploadMsg::TagInputChanged(t) => self.draft.tag_input = t,
            UploadMsg::AddTag => self.draft.add_tag(),
            UploadMsg::RemoveTag(t) => self.draft.remove_tag(&t),
            UploadMsg::Submit => {
                if !self.draft.can_submit() {
                    return false;
                }
                tracing::info!(title = %self.draft.title, files = self.draft.files.len(), "portfolio submitted");
                self.draft.submit();
            }
            UploadMsg::UploadAnother => self.draft.upload_another(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.draft.submitted {
            return self.view_submitted(ctx);
        }
        let link = ctx.link();
        let draft = &self.draft;

        let on_drag_over = link.callback(|e: DragEvent| {
            e.prevent_default();
            UploadMsg::SetDragActive(true)
        });
        let on_drag_leave = link.callback(|e: DragEvent| {
            e.prevent_default();
            UploadMsg::SetDragActive(false)
        });
        let on_drop = link.callback(|e: DragEvent| {
            e.prevent_default();
            UploadMsg::FilesPicked(util::new_files(e.data_transfer().and_then(|d| d.files())))
        });
        let on_file_input = link.callback(|e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let files = util::new_files(input.files());
            // allows picking the same file again
            input.set_value("");
            UploadMsg::FilesPicked(files)
        });
        let on_tag_key = link.batch_callback(|e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                Some(UploadMsg::AddTag)
            } else {
                None
            }
        });

        html! {
            <div class="container py-5" style="max-width: 56rem">
                <div class="mb-5">
                    <h1 class="fw-bold">{ "Upload Your Portfolio" }</h1>
                    <p class="lead text-muted">
                        { "Share your work with the community and get valuable feedback from peers and experts." }
                    </p>
                </div>

                <div class="card mb-4">
                    <div class="card-body">
                        <h2 class="h5 fw-semibold mb-3">{ "Upload Files" }</h2>
                        <label
                            class={ classes!("drop-zone", "d-block", "text-center", "p-5", "rounded-3", self.drag_active.then_some("drag-active")) }
                            ondragenter={ on_drag_over.clone() }
                            ondragover={ on_drag_over }
                            ondragleave={ on_drag_leave }
                            ondrop={ on_drop }
                        >
                            <span class="bi-cloud-arrow-up fs-1 text-primary" aria-hidden="true"></span>
                            <p class="fw-medium mt-2 mb-1">{ "Drag and drop your files here" }</p>
                            <p class="small text-muted mb-3">{ "or click to browse (images, PDFs, videos)" }</p>
                            <span class="btn btn-outline-primary">{ "Choose Files" }</span>
                            <input
                                type="file"
                                class="d-none"
                                multiple=true
                                accept="image/*,application/pdf,video/*"
                                onchange={ on_file_input }
                            />
                        </label>

                        if !draft.files.is_empty() {
                            <div class="row row-cols-2 row-cols-md-3 g-3 mt-2">
                                { for draft.files.iter().map(|f| self.view_file(ctx, f)) }
                            </div>
                        }
                    </div>
                </div>

                <div class="card mb-4">
                    <div class="card-body d-flex flex-column gap-3">
                        <h2 class="h5 fw-semibold mb-0">{ "Portfolio Details" }</h2>
                        <div>
                            <label class="form-label" for="upload-title">{ "Title *" }</label>
                            <input
                                id="upload-title"
                                class="form-control"
                                placeholder="Give your portfolio a descriptive title"
                                value={ draft.title.clone() }
                                oninput={ link.callback(|e| UploadMsg::TitleChanged(util::input_value(e))) }
                            />
                        </div>
                        <div>
                            <label class="form-label" for="upload-description">{ "Description *" }</label>
                            <textarea
                                id="upload-description"
                                class="form-control"
                                rows="5"
                                placeholder="Describe your project, the process, tools used, and what kind of feedback you're looking for..."
                                value={ draft.description.clone() }
                                oninput={ link.callback(|e| UploadMsg::DescriptionChanged(util::textarea_value(e))) }
                            />
                        </div>
                        <div>
                            <label class="form-label" for="upload-category">{ "Category *" }</label>
                            <select
                                id="upload-category"
                                class="form-select"
                                onchange={ link.callback(|e: Event| UploadMsg::CategoryChanged(util::select_value(e))) }
                            >
                                <option value="" selected={ draft.category.is_empty() } disabled=true>
                                    { "Select a category" }
                                </option>
                                { for UploadDraft::categories().map(|c| html! {
                                    <option value={ c } selected={ draft.category == c }>{ c }</option>
                                }) }
                            </select>
                        </div>
                        <div>
                            <label class="form-label" for="upload-tags">
                                { format!("Tags (up to {})", ctx.props().settings.max_tags) }
                            </label>
                            <div class="d-flex gap-2">
                                <input
                                    id="upload-tags"
                                    class="form-control"
                                    placeholder="Add a tag and press Enter"
                                    value={ draft.tag_input.clone() }
                                    disabled={ draft.is_tag_limit_reached() }
                                    oninput={ link.callback(|e| UploadMsg::TagInputChanged(util::input_value(e))) }
                                    onkeydown={ on_tag_key }
                                />
                                <button
                                    type="button"
                                    class="btn btn-outline-secondary"
                                    disabled={ !draft.can_add_tag() }
                                    onclick={ link.callback(|_| UploadMsg::AddTag) }
                                >
                                    { "Add" }
                                </button>
                            </div>
                            if !draft.tags.is_empty() {
                                <div class="d-flex flex-wrap gap-2 mt-2">
                                    { for draft.tags.iter().map(|t| {
                                        let tag = t.clone();
                                        html! {
                                            <span class="badge rounded-pill text-bg-light fs-6 fw-normal">
                                                { t }
                                                <button
                                                    type="button"
                                                    class="btn-close ms-2"
                                                    style="font-size: 0.6rem"
                                                    aria-label={ format!("Remove tag {}", t) }
                                                    onclick={ link.callback(move |_| UploadMsg::RemoveTag(tag.clone())) }
                                                >
                                                </button>
                                            </span>
                                        }
                                    }) }
                                </div>
                            }
                        </div>
                    </div>
                </div>

                <div class="d-flex justify-content-end gap-2">
                    <a
                        class="btn btn-outline-secondary"
                        href={ Page::Portfolios.href() }
                        onclick={ util::nav_link(&ctx.props().on_navigate, Page::Portfolios) }
                    >
                        { "Cancel" }
                    </a>
                    <button
                        type="button"
                        class="btn btn-primary"
                        disabled={ !draft.can_submit() }
                        onclick={ link.callback(|_| UploadMsg::Submit) }
                    >
                        <span class="bi-upload me-2" aria-hidden="true"></span>
                        { "Submit for Review" }
                    </button>
                </div>
            </div>
        }
    }
}

impl Upload {
    fn view_file(&self, ctx: &Context<Self>, file: &UploadedFile) -> Html {
        let id = file.id.clone();
        let preview = match (&file.preview, file.kind) {
            (Some(url), FileKind::Image) => html! {
                <img class="w-100 h-100 object-fit-cover" src={ url.clone() } alt={ file.name.clone() } />
            },
            (_, FileKind::Pdf) => html! {
                <span class="bi-file-earmark-pdf fs-1 text-danger" aria-hidden="true"></span>
            },
            (_, FileKind::Video) => html! {
                <span class="bi-film fs-1 text-primary" aria-hidden="true"></span>
            },
            (None, FileKind::Image) => html! {
                <span class="bi-image fs-1 text-muted" aria-hidden="true"></span>
            },
        };
        html! {
            <div class="col" key={ file.id.clone() }>
                <div class="card h-100">
                    <div class="ratio ratio-4x3 bg-light rounded-top overflow-hidden">
                        <div class="d-flex align-items-center justify-content-center">
                            { preview }
                        </div>
                    </div>
                    <div class="card-body p-2 d-flex align-items-center gap-2">
                        <div class="flex-grow-1 small text-truncate">
                            <div class="text-truncate fw-medium">{ &file.name }</div>
                            <div class="text-muted">{ &file.size }</div>
                        </div>
                        <button
                            type="button"
                            class="btn-close"
                            aria-label={ format!("Remove {}", file.name) }
                            onclick={ ctx.link().callback(move |_| UploadMsg::RemoveFile(id.clone())) }
                        >
                        </button>
                    </div>
                </div>
            </div>
        }
    }

    fn view_submitted(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = &ctx.props().on_navigate;
        html! {
            <div class="container py-5 text-center" style="max-width: 36rem">
                <span class="bi-check-circle-fill text-success" style="font-size: 4rem" aria-hidden="true"></span>
                <h1 class="h2 fw-bold mt-3">{ "Portfolio Submitted!" }</h1>
                <p class="text-muted mb-4">
                    { format!(
                        "Your portfolio \"{}\" has been uploaded and is now visible to the community. \
                         You'll be notified when you receive feedback.",
                        self.draft.title,
                    ) }
                </p>
                <div class="d-flex justify-content-center gap-2">
                    <a
                        class="btn btn-primary"
                        href={ Page::Portfolios.href() }
                        onclick={ util::nav_link(on_navigate, Page::Portfolios) }
                    >
                        { "Browse Portfolios" }
                    </a>
                    <button
                        type="button"
                        class="btn btn-outline-secondary"
                        onclick={ ctx.link().callback(|_| UploadMsg::UploadAnother) }
                    >
                        { "Upload Another" }
                    </button>
                </div>
            </div>
        }
    }
}
