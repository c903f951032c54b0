//! アップロードエリアコンポーネント
//!
//! ファイル選択・ドラッグ&ドロップで画像を1枚受け取り、Data URLにして親へ渡す。
//! busy の間は選択も「Change Image」も無効。

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File, HtmlInputElement};
use genfarm_common::acquisition::first_file;
use genfarm_common::{Error, ImageAcquisition, ImageSource, Result};

/// ブラウザで選択されたファイル
pub struct BrowserImage {
    file: gloo::file::File,
    name: String,
    media_type: String,
}

impl From<File> for BrowserImage {
    fn from(file: File) -> Self {
        let file = gloo::file::File::from(file);
        Self {
            name: file.name(),
            media_type: file.raw_mime_type(),
            file,
        }
    }
}

impl ImageSource for BrowserImage {
    fn media_type(&self) -> &str {
        &self.media_type
    }

    fn name(&self) -> &str {
        &self.name
    }

    async fn read_data_url(&self) -> Result<String> {
        gloo::file::futures::read_as_data_url(&self.file)
            .await
            .map_err(|e| Error::FileRead(format!("{:?}", e)))
    }
}

#[component]
pub fn UploadArea<F>(
    #[prop(into)] busy: Signal<bool>,
    on_image_select: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let acquisition = RwSignal::new(ImageAcquisition::new());
    let has_preview = move || acquisition.with(|a| a.preview().is_some());

    let handle_file = move |file: File| {
        let image = BrowserImage::from(file);
        let admitted =
            acquisition.with_untracked(|a| a.admit(image.media_type(), busy.get_untracked()));

        match admitted {
            Ok(()) => {}
            Err(err @ Error::InvalidFileType(_)) => {
                gloo::dialogs::alert(&err.to_string());
                return;
            }
            Err(err) => {
                gloo::console::warn!(format!("{}: {}", image.name(), err));
                return;
            }
        }

        let on_image_select = on_image_select.clone();
        spawn_local(async move {
            match image.read_data_url().await {
                Ok(data_url) => {
                    // 読み込み中に解析が始まっていたらプレビューも送信もしない
                    let busy_now = busy.get_untracked();
                    let accepted = acquisition
                        .try_update(|a| a.accept(data_url.clone(), busy_now).map(|_| ()));
                    match accepted {
                        Some(Ok(())) => on_image_select(data_url),
                        Some(Err(err)) => {
                            gloo::console::warn!(format!("{}: {}", image.name(), err));
                        }
                        None => {}
                    }
                }
                Err(err) => gloo::console::error!(format!("{}: {}", image.name(), err)),
            }
        });
    };

    let on_drop = {
        let handle_file = handle_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            acquisition.update(|a| a.drag_leave());

            let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
                return;
            };
            if let Some(file) = first_file((0..files.length()).filter_map(|i| files.get(i))) {
                handle_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !acquisition.with_untracked(|a| a.is_dragging()) {
            acquisition.update(|a| a.drag_over());
        }
    };

    let on_dragleave = move |_: DragEvent| {
        acquisition.update(|a| a.drag_leave());
    };

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            handle_file(file);
        }
        // 同じファイルを選び直せるようにする
        input.set_value("");
    };

    let on_change_image = move |_| {
        acquisition.update(|a| {
            a.change_image(busy.get_untracked());
        });
    };

    view! {
        <div class="upload-wrapper">
            <div
                class=move || {
                    let mut classes = vec!["upload-area"];
                    if acquisition.with(|a| a.is_dragging()) {
                        classes.push("dragover");
                    }
                    if has_preview() {
                        classes.push("has-preview");
                    }
                    if busy.get() {
                        classes.push("disabled");
                    }
                    classes.join(" ")
                }
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=on_dragleave
            >
                <Show
                    when=has_preview
                    fallback=move || {
                        let on_change = on_change.clone();
                        view! {
                            <div class="upload-prompt">
                                <div class="upload-icon">"📤"</div>
                                <h3>"Upload Plant Image"</h3>
                                <p class="text-muted">
                                    "Drag & drop or click to select a photo of your plant"
                                </p>
                                <label class=move || {
                                    if busy.get() { "btn btn-primary btn-large disabled" } else { "btn btn-primary btn-large" }
                                }>
                                    {move || if busy.get() { "⏳ Analyzing..." } else { "Choose File" }}
                                    <input
                                        type="file"
                                        accept="image/*"
                                        class="hidden"
                                        disabled=move || busy.get()
                                        on:change=on_change
                                    />
                                </label>
                            </div>
                        }
                    }
                >
                    <img
                        class="upload-preview"
                        alt="Upload preview"
                        src=move || acquisition.with(|a| a.preview().map(str::to_string))
                    />
                    <div class="upload-actions">
                        <button
                            class="btn btn-outline"
                            disabled=move || busy.get()
                            on:click=on_change_image
                        >
                            "Change Image"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
