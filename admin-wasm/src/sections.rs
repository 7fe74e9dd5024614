//! Per-entity table sections. Every component follows the same shape: load on
//! activation, one row per item, dialog-gated mutations, reload after a
//! successful mutation.
//!
//! Request ordering: each spawned fetch carries the sequence number it was
//! issued under; a response whose number no longer matches is dropped, so a
//! slow reply can never overwrite a newer one.

use crate::api;
use crate::models::*;
use crate::rows;
use crate::widgets::{error_row, placeholder_row, LoadState, Modal, Notice};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    /// Whether this section is the visible one.
    pub active: bool,
    /// Bumped by the shell on every navigation; re-entering the active
    /// section re-runs its loader.
    pub refresh: u32,
}

fn should_reload(new: &SectionProps, old: &SectionProps) -> bool {
    new.active && (!old.active || new.refresh != old.refresh)
}

// ==================== Пользователи ====================

#[derive(Clone, PartialEq)]
enum UserDialog {
    None,
    EditRole { id: i64, value: String },
    ConfirmDelete { id: i64 },
}

pub enum UsersMsg {
    Loaded(u32, Result<Vec<User>, String>),
    OpenRole(i64, String),
    RoleValue(String),
    OpenDelete(i64),
    CloseDialog,
    Submit,
    Done(Result<(), String>),
    DismissNotice,
}

pub struct UsersSection {
    state: LoadState<Vec<User>>,
    dialog: UserDialog,
    notice: Option<String>,
    seq: u32,
}

impl UsersSection {
    fn load(&mut self, ctx: &Context<Self>) {
        self.seq += 1;
        let seq = self.seq;
        self.state = LoadState::Loading;
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(UsersMsg::Loaded(seq, api::users().await));
        });
    }
}

impl Component for UsersSection {
    type Message = UsersMsg;
    type Properties = SectionProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut section = Self {
            state: LoadState::Loading,
            dialog: UserDialog::None,
            notice: None,
            seq: 0,
        };
        if ctx.props().active {
            section.load(ctx);
        }
        section
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if should_reload(ctx.props(), old_props) {
            self.load(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            UsersMsg::Loaded(seq, result) => {
                if seq != self.seq {
                    // устаревший ответ
                    return false;
                }
                self.state = match result {
                    Ok(users) => LoadState::Loaded(users),
                    Err(e) => {
                        log::error!("Error loading users: {}", e);
                        LoadState::Failed(e)
                    }
                };
                true
            }
            UsersMsg::OpenRole(id, value) => {
                self.dialog = UserDialog::EditRole { id, value };
                true
            }
            UsersMsg::RoleValue(value) => {
                if let UserDialog::EditRole { value: v, .. } = &mut self.dialog {
                    *v = value;
                }
                false
            }
            UsersMsg::OpenDelete(id) => {
                self.dialog = UserDialog::ConfirmDelete { id };
                true
            }
            UsersMsg::CloseDialog => {
                self.dialog = UserDialog::None;
                true
            }
            UsersMsg::Submit => {
                let dialog = std::mem::replace(&mut self.dialog, UserDialog::None);
                match dialog {
                    UserDialog::EditRole { id, value } => {
                        if !valid_role(&value) {
                            self.notice = Some("Role tidak valid".to_string());
                            return true;
                        }
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            link.send_message(UsersMsg::Done(
                                api::update_user_role(id, &value).await,
                            ));
                        });
                    }
                    UserDialog::ConfirmDelete { id } => {
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            link.send_message(UsersMsg::Done(api::delete_user(id).await));
                        });
                    }
                    UserDialog::None => {}
                }
                true
            }
            UsersMsg::Done(Ok(())) => {
                self.load(ctx);
                true
            }
            UsersMsg::Done(Err(e)) => {
                self.notice = Some(e);
                true
            }
            UsersMsg::DismissNotice => {
                self.notice = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match &self.state {
            LoadState::Loading => placeholder_row(6, "Memuat data..."),
            LoadState::Failed(_) => error_row(6),
            LoadState::Loaded(users) if users.is_empty() => {
                placeholder_row(6, "Tidak ada data pengguna")
            }
            LoadState::Loaded(users) => rows::user_rows(users)
                .into_iter()
                .map(|row| {
                    let id = row.id;
                    let role = row.role.clone();
                    let open_role = ctx
                        .link()
                        .callback(move |_| UsersMsg::OpenRole(id, role.clone()));
                    let open_delete = ctx.link().callback(move |_| UsersMsg::OpenDelete(id));
                    html! {
                        <tr key={row.id}>
                            <td>{ row.id }</td>
                            <td>{ &row.name }</td>
                            <td>{ &row.email }</td>
                            <td><span class={classes!("badge", row.role_badge)}>{ &row.role }</span></td>
                            <td>{ &row.created }</td>
                            <td>
                                <button class="btn btn-sm btn-secondary" onclick={open_role}>{ "Ubah Role" }</button>
                                <button class="btn btn-sm btn-danger" onclick={open_delete}>{ "Hapus" }</button>
                            </td>
                        </tr>
                    }
                })
                .collect::<Html>(),
        };

        html! {
            <>
                { self.view_notice(ctx) }
                <div class="table-container">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{ "ID" }</th>
                                <th>{ "Nama" }</th>
                                <th>{ "Email" }</th>
                                <th>{ "Role" }</th>
                                <th>{ "Terdaftar" }</th>
                                <th>{ "Aksi" }</th>
                            </tr>
                        </thead>
                        <tbody>{ body }</tbody>
                    </table>
                </div>
                { self.view_dialog(ctx) }
            </>
        }
    }
}

impl UsersSection {
    fn view_notice(&self, ctx: &Context<Self>) -> Html {
        match &self.notice {
            Some(message) => html! {
                <Notice
                    message={message.clone()}
                    on_dismiss={ctx.link().callback(|_| UsersMsg::DismissNotice)}
                />
            },
            None => html! {},
        }
    }

    fn view_dialog(&self, ctx: &Context<Self>) -> Html {
        match &self.dialog {
            UserDialog::None => html! {},
            UserDialog::EditRole { id, value } => {
                let onchange = ctx.link().callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    UsersMsg::RoleValue(select.value())
                });
                html! {
                    <Modal
                        title={format!("Ubah role pengguna #{}", id)}
                        on_confirm={ctx.link().callback(|_| UsersMsg::Submit)}
                        on_cancel={ctx.link().callback(|_| UsersMsg::CloseDialog)}
                    >
                        <label>{ "Role" }</label>
                        <select {onchange}>
                            { for ROLES.iter().copied().map(|role| html! {
                                <option value={role} selected={value.as_str() == role}>{ role }</option>
                            }) }
                        </select>
                    </Modal>
                }
            }
            UserDialog::ConfirmDelete { id } => html! {
                <Modal
                    title={format!("Hapus pengguna #{}", id)}
                    danger=true
                    confirm_label="Hapus"
                    on_confirm={ctx.link().callback(|_| UsersMsg::Submit)}
                    on_cancel={ctx.link().callback(|_| UsersMsg::CloseDialog)}
                >
                    <p>{ "Tindakan ini juga menghapus data terkait (posts/comments/volunteers)." }</p>
                </Modal>
            },
        }
    }
}

// ==================== Посты ====================

pub enum PostsMsg {
    Loaded(u32, Result<Vec<Post>, String>),
    OpenDelete(i64),
    CloseDialog,
    ConfirmDelete,
    Done(Result<(), String>),
    DismissNotice,
}

pub struct PostsSection {
    state: LoadState<Vec<Post>>,
    pending_delete: Option<i64>,
    notice: Option<String>,
    seq: u32,
}

impl PostsSection {
    fn load(&mut self, ctx: &Context<Self>) {
        self.seq += 1;
        let seq = self.seq;
        self.state = LoadState::Loading;
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(PostsMsg::Loaded(seq, api::posts().await));
        });
    }
}

impl Component for PostsSection {
    type Message = PostsMsg;
    type Properties = SectionProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut section = Self {
            state: LoadState::Loading,
            pending_delete: None,
            notice: None,
            seq: 0,
        };
        if ctx.props().active {
            section.load(ctx);
        }
        section
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if should_reload(ctx.props(), old_props) {
            self.load(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PostsMsg::Loaded(seq, result) => {
                if seq != self.seq {
                    return false;
                }
                self.state = match result {
                    Ok(posts) => LoadState::Loaded(posts),
                    Err(e) => {
                        log::error!("Error loading posts: {}", e);
                        LoadState::Failed(e)
                    }
                };
                true
            }
            PostsMsg::OpenDelete(id) => {
                self.pending_delete = Some(id);
                true
            }
            PostsMsg::CloseDialog => {
                self.pending_delete = None;
                true
            }
            PostsMsg::ConfirmDelete => {
                if let Some(id) = self.pending_delete.take() {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        link.send_message(PostsMsg::Done(api::delete_post(id).await));
                    });
                }
                true
            }
            PostsMsg::Done(Ok(())) => {
                self.load(ctx);
                true
            }
            PostsMsg::Done(Err(e)) => {
                self.notice = Some(e);
                true
            }
            PostsMsg::DismissNotice => {
                self.notice = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match &self.state {
            LoadState::Loading => placeholder_row(6, "Memuat data..."),
            LoadState::Failed(_) => error_row(6),
            LoadState::Loaded(posts) if posts.is_empty() => {
                placeholder_row(6, "Tidak ada data postingan")
            }
            LoadState::Loaded(posts) => rows::post_rows(posts)
                .into_iter()
                .map(|row| {
                    let id = row.id;
                    let open_delete = ctx.link().callback(move |_| PostsMsg::OpenDelete(id));
                    html! {
                        <tr key={row.id}>
                            <td>{ row.id }</td>
                            <td>{ &row.author }</td>
                            <td class="text-truncate">{ &row.text }</td>
                            <td>{ row.likes }</td>
                            <td>{ &row.created }</td>
                            <td>
                                <button class="btn btn-sm btn-danger" onclick={open_delete}>{ "Hapus" }</button>
                            </td>
                        </tr>
                    }
                })
                .collect::<Html>(),
        };

        let dialog = match self.pending_delete {
            Some(id) => html! {
                <Modal
                    title={format!("Hapus postingan #{}", id)}
                    danger=true
                    confirm_label="Hapus"
                    on_confirm={ctx.link().callback(|_| PostsMsg::ConfirmDelete)}
                    on_cancel={ctx.link().callback(|_| PostsMsg::CloseDialog)}
                >
                    <p>{ "Apakah Anda yakin ingin menghapus postingan ini?" }</p>
                </Modal>
            },
            None => html! {},
        };

        html! {
            <>
                if let Some(message) = &self.notice {
                    <Notice
                        message={message.clone()}
                        on_dismiss={ctx.link().callback(|_| PostsMsg::DismissNotice)}
                    />
                }
                <div class="table-container">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{ "ID" }</th>
                                <th>{ "Pengguna" }</th>
                                <th>{ "Konten" }</th>
                                <th>{ "Likes" }</th>
                                <th>{ "Tanggal" }</th>
                                <th>{ "Aksi" }</th>
                            </tr>
                        </thead>
                        <tbody>{ body }</tbody>
                    </table>
                </div>
                { dialog }
            </>
        }
    }
}

// ==================== Кампании ====================

pub enum CampaignsMsg {
    Loaded(u32, Result<Vec<Campaign>, String>),
    OpenStatus(i64, String),
    StatusValue(String),
    CloseDialog,
    Submit,
    Done(Result<(), String>),
    DismissNotice,
}

pub struct CampaignsSection {
    state: LoadState<Vec<Campaign>>,
    dialog: Option<(i64, String)>,
    notice: Option<String>,
    seq: u32,
}

impl CampaignsSection {
    fn load(&mut self, ctx: &Context<Self>) {
        self.seq += 1;
        let seq = self.seq;
        self.state = LoadState::Loading;
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(CampaignsMsg::Loaded(seq, api::campaigns().await));
        });
    }
}

impl Component for CampaignsSection {
    type Message = CampaignsMsg;
    type Properties = SectionProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut section = Self {
            state: LoadState::Loading,
            dialog: None,
            notice: None,
            seq: 0,
        };
        if ctx.props().active {
            section.load(ctx);
        }
        section
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if should_reload(ctx.props(), old_props) {
            self.load(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CampaignsMsg::Loaded(seq, result) => {
                if seq != self.seq {
                    return false;
                }
                self.state = match result {
                    Ok(campaigns) => LoadState::Loaded(campaigns),
                    Err(e) => {
                        log::error!("Error loading campaigns: {}", e);
                        LoadState::Failed(e)
                    }
                };
                true
            }
            CampaignsMsg::OpenStatus(id, value) => {
                // статус за пределами allow-list формы сбрасываем на active
                let value = if valid_campaign_status(&value) {
                    value
                } else {
                    "active".to_string()
                };
                self.dialog = Some((id, value));
                true
            }
            CampaignsMsg::StatusValue(value) => {
                if let Some((_, v)) = &mut self.dialog {
                    *v = value;
                }
                false
            }
            CampaignsMsg::CloseDialog => {
                self.dialog = None;
                true
            }
            CampaignsMsg::Submit => {
                if let Some((id, value)) = self.dialog.take() {
                    if !valid_campaign_status(&value) {
                        self.notice = Some("Status tidak valid".to_string());
                        return true;
                    }
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        link.send_message(CampaignsMsg::Done(
                            api::update_campaign_status(id, &value).await,
                        ));
                    });
                }
                true
            }
            CampaignsMsg::Done(Ok(())) => {
                self.load(ctx);
                true
            }
            CampaignsMsg::Done(Err(e)) => {
                self.notice = Some(e);
                true
            }
            CampaignsMsg::DismissNotice => {
                self.notice = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match &self.state {
            LoadState::Loading => placeholder_row(7, "Memuat data..."),
            LoadState::Failed(_) => error_row(7),
            LoadState::Loaded(campaigns) if campaigns.is_empty() => {
                placeholder_row(7, "Tidak ada data kampanye")
            }
            LoadState::Loaded(campaigns) => rows::campaign_rows(campaigns)
                .into_iter()
                .map(|row| {
                    let id = row.id;
                    let status = row.status.clone();
                    let open = ctx
                        .link()
                        .callback(move |_| CampaignsMsg::OpenStatus(id, status.clone()));
                    html! {
                        <tr key={row.id}>
                            <td>{ row.id }</td>
                            <td>{ &row.title }</td>
                            <td>{ &row.category }</td>
                            <td>{ &row.target }</td>
                            <td>{ &row.current }</td>
                            <td><span class={classes!("badge", format!("badge-{}", row.badge))}>{ &row.status }</span></td>
                            <td>
                                <button class="btn btn-sm btn-secondary" onclick={open}>{ "Update Status" }</button>
                            </td>
                        </tr>
                    }
                })
                .collect::<Html>(),
        };

        let dialog = match &self.dialog {
            Some((id, value)) => {
                let onchange = ctx.link().callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    CampaignsMsg::StatusValue(select.value())
                });
                html! {
                    <Modal
                        title={format!("Status kampanye #{}", id)}
                        on_confirm={ctx.link().callback(|_| CampaignsMsg::Submit)}
                        on_cancel={ctx.link().callback(|_| CampaignsMsg::CloseDialog)}
                    >
                        <label>{ "Status" }</label>
                        <select {onchange}>
                            { for CAMPAIGN_STATUSES.iter().copied().map(|status| html! {
                                <option value={status} selected={value.as_str() == status}>{ status }</option>
                            }) }
                        </select>
                    </Modal>
                }
            }
            None => html! {},
        };

        html! {
            <>
                if let Some(message) = &self.notice {
                    <Notice
                        message={message.clone()}
                        on_dismiss={ctx.link().callback(|_| CampaignsMsg::DismissNotice)}
                    />
                }
                <div class="table-container">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{ "ID" }</th>
                                <th>{ "Judul" }</th>
                                <th>{ "Kategori" }</th>
                                <th>{ "Target" }</th>
                                <th>{ "Terkumpul" }</th>
                                <th>{ "Status" }</th>
                                <th>{ "Aksi" }</th>
                            </tr>
                        </thead>
                        <tbody>{ body }</tbody>
                    </table>
                </div>
                { dialog }
            </>
        }
    }
}

// ==================== Донации ====================

pub enum DonationsMsg {
    Loaded(u32, Result<Vec<Donation>, String>),
    OpenStatus(i64, String),
    StatusValue(String),
    CloseDialog,
    Submit,
    Done(Result<(), String>),
    DismissNotice,
}

pub struct DonationsSection {
    state: LoadState<Vec<Donation>>,
    dialog: Option<(i64, String)>,
    notice: Option<String>,
    seq: u32,
}

impl DonationsSection {
    fn load(&mut self, ctx: &Context<Self>) {
        self.seq += 1;
        let seq = self.seq;
        self.state = LoadState::Loading;
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(DonationsMsg::Loaded(seq, api::donations().await));
        });
    }
}

impl Component for DonationsSection {
    type Message = DonationsMsg;
    type Properties = SectionProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut section = Self {
            state: LoadState::Loading,
            dialog: None,
            notice: None,
            seq: 0,
        };
        if ctx.props().active {
            section.load(ctx);
        }
        section
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if should_reload(ctx.props(), old_props) {
            self.load(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DonationsMsg::Loaded(seq, result) => {
                if seq != self.seq {
                    return false;
                }
                self.state = match result {
                    Ok(donations) => LoadState::Loaded(donations),
                    Err(e) => {
                        log::error!("Error loading donations: {}", e);
                        LoadState::Failed(e)
                    }
                };
                true
            }
            DonationsMsg::OpenStatus(id, value) => {
                let value = if valid_donation_status(&value) {
                    value
                } else {
                    "pending".to_string()
                };
                self.dialog = Some((id, value));
                true
            }
            DonationsMsg::StatusValue(value) => {
                if let Some((_, v)) = &mut self.dialog {
                    *v = value;
                }
                false
            }
            DonationsMsg::CloseDialog => {
                self.dialog = None;
                true
            }
            DonationsMsg::Submit => {
                if let Some((id, value)) = self.dialog.take() {
                    if !valid_donation_status(&value) {
                        self.notice = Some("Status tidak valid".to_string());
                        return true;
                    }
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        link.send_message(DonationsMsg::Done(
                            api::update_donation_status(id, &value).await,
                        ));
                    });
                }
                true
            }
            DonationsMsg::Done(Ok(())) => {
                self.load(ctx);
                true
            }
            DonationsMsg::Done(Err(e)) => {
                self.notice = Some(e);
                true
            }
            DonationsMsg::DismissNotice => {
                self.notice = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match &self.state {
            LoadState::Loading => placeholder_row(7, "Memuat data..."),
            LoadState::Failed(_) => error_row(7),
            LoadState::Loaded(donations) if donations.is_empty() => {
                placeholder_row(7, "Tidak ada data donasi")
            }
            LoadState::Loaded(donations) => rows::donation_rows(donations)
                .into_iter()
                .map(|row| {
                    let id = row.id;
                    let status = row.status.clone();
                    let open = ctx
                        .link()
                        .callback(move |_| DonationsMsg::OpenStatus(id, status.clone()));
                    html! {
                        <tr key={row.id}>
                            <td>{ row.id }</td>
                            <td>{ &row.donor }</td>
                            <td>{ &row.campaign }</td>
                            <td>{ &row.amount }</td>
                            <td>{ &row.created }</td>
                            <td><span class={classes!("badge", format!("badge-{}", row.badge))}>{ &row.status }</span></td>
                            <td>
                                <button class="btn btn-sm btn-secondary" onclick={open}>{ "Update Status" }</button>
                            </td>
                        </tr>
                    }
                })
                .collect::<Html>(),
        };

        let dialog = match &self.dialog {
            Some((id, value)) => {
                let onchange = ctx.link().callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    DonationsMsg::StatusValue(select.value())
                });
                html! {
                    <Modal
                        title={format!("Status donasi #{}", id)}
                        on_confirm={ctx.link().callback(|_| DonationsMsg::Submit)}
                        on_cancel={ctx.link().callback(|_| DonationsMsg::CloseDialog)}
                    >
                        <label>{ "Status" }</label>
                        <select {onchange}>
                            { for DONATION_STATUSES.iter().copied().map(|status| html! {
                                <option value={status} selected={value.as_str() == status}>{ status }</option>
                            }) }
                        </select>
                    </Modal>
                }
            }
            None => html! {},
        };

        html! {
            <>
                if let Some(message) = &self.notice {
                    <Notice
                        message={message.clone()}
                        on_dismiss={ctx.link().callback(|_| DonationsMsg::DismissNotice)}
                    />
                }
                <div class="table-container">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{ "ID" }</th>
                                <th>{ "Donatur" }</th>
                                <th>{ "Kampanye" }</th>
                                <th>{ "Jumlah" }</th>
                                <th>{ "Tanggal" }</th>
                                <th>{ "Status" }</th>
                                <th>{ "Aksi" }</th>
                            </tr>
                        </thead>
                        <tbody>{ body }</tbody>
                    </table>
                </div>
                { dialog }
            </>
        }
    }
}

// ==================== Комментарии ====================

pub enum CommentsMsg {
    Loaded(u32, Result<Vec<Comment>, String>),
    OpenDelete(i64),
    CloseDialog,
    ConfirmDelete,
    Done(Result<(), String>),
    DismissNotice,
}

pub struct CommentsSection {
    state: LoadState<Vec<Comment>>,
    pending_delete: Option<i64>,
    notice: Option<String>,
    seq: u32,
}

impl CommentsSection {
    fn load(&mut self, ctx: &Context<Self>) {
        self.seq += 1;
        let seq = self.seq;
        self.state = LoadState::Loading;
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(CommentsMsg::Loaded(seq, api::comments().await));
        });
    }
}

impl Component for CommentsSection {
    type Message = CommentsMsg;
    type Properties = SectionProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut section = Self {
            state: LoadState::Loading,
            pending_delete: None,
            notice: None,
            seq: 0,
        };
        if ctx.props().active {
            section.load(ctx);
        }
        section
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if should_reload(ctx.props(), old_props) {
            self.load(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CommentsMsg::Loaded(seq, result) => {
                if seq != self.seq {
                    return false;
                }
                self.state = match result {
                    Ok(comments) => LoadState::Loaded(comments),
                    Err(e) => {
                        log::error!("Error loading comments: {}", e);
                        LoadState::Failed(e)
                    }
                };
                true
            }
            CommentsMsg::OpenDelete(id) => {
                self.pending_delete = Some(id);
                true
            }
            CommentsMsg::CloseDialog => {
                self.pending_delete = None;
                true
            }
            CommentsMsg::ConfirmDelete => {
                if let Some(id) = self.pending_delete.take() {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        link.send_message(CommentsMsg::Done(api::delete_comment(id).await));
                    });
                }
                true
            }
            CommentsMsg::Done(Ok(())) => {
                self.load(ctx);
                true
            }
            CommentsMsg::Done(Err(e)) => {
                self.notice = Some(e);
                true
            }
            CommentsMsg::DismissNotice => {
                self.notice = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match &self.state {
            LoadState::Loading => placeholder_row(6, "Memuat data..."),
            LoadState::Failed(_) => error_row(6),
            LoadState::Loaded(comments) if comments.is_empty() => {
                placeholder_row(6, "Tidak ada data komentar")
            }
            LoadState::Loaded(comments) => rows::comment_rows(comments)
                .into_iter()
                .map(|row| {
                    let id = row.id;
                    let open_delete = ctx.link().callback(move |_| CommentsMsg::OpenDelete(id));
                    html! {
                        <tr key={row.id}>
                            <td>{ row.id }</td>
                            <td>{ row.post_id }</td>
                            <td>{ &row.author }</td>
                            <td class="text-truncate">{ &row.text }</td>
                            <td>{ &row.created }</td>
                            <td>
                                <button class="btn btn-sm btn-danger" onclick={open_delete}>{ "Hapus" }</button>
                            </td>
                        </tr>
                    }
                })
                .collect::<Html>(),
        };

        let dialog = match self.pending_delete {
            Some(id) => html! {
                <Modal
                    title={format!("Hapus komentar #{}", id)}
                    danger=true
                    confirm_label="Hapus"
                    on_confirm={ctx.link().callback(|_| CommentsMsg::ConfirmDelete)}
                    on_cancel={ctx.link().callback(|_| CommentsMsg::CloseDialog)}
                >
                    <p>{ "Apakah Anda yakin ingin menghapus komentar ini?" }</p>
                </Modal>
            },
            None => html! {},
        };

        html! {
            <>
                if let Some(message) = &self.notice {
                    <Notice
                        message={message.clone()}
                        on_dismiss={ctx.link().callback(|_| CommentsMsg::DismissNotice)}
                    />
                }
                <div class="table-container">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{ "ID" }</th>
                                <th>{ "Post" }</th>
                                <th>{ "Pengguna" }</th>
                                <th>{ "Komentar" }</th>
                                <th>{ "Tanggal" }</th>
                                <th>{ "Aksi" }</th>
                            </tr>
                        </thead>
                        <tbody>{ body }</tbody>
                    </table>
                </div>
                { dialog }
            </>
        }
    }
}

// ==================== Волонтёры ====================

#[derive(Clone, PartialEq)]
struct VolunteerDialog {
    id: i64,
    status: String,
    hours: String,
}

pub enum VolunteersMsg {
    Loaded(u32, Result<Vec<Volunteer>, String>),
    OpenEdit(i64, String, f64),
    StatusValue(String),
    HoursValue(String),
    CloseDialog,
    Submit,
    Done(Result<(), String>),
    DismissNotice,
}

pub struct VolunteersSection {
    state: LoadState<Vec<Volunteer>>,
    dialog: Option<VolunteerDialog>,
    notice: Option<String>,
    seq: u32,
}

impl VolunteersSection {
    fn load(&mut self, ctx: &Context<Self>) {
        self.seq += 1;
        let seq = self.seq;
        self.state = LoadState::Loading;
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(VolunteersMsg::Loaded(seq, api::volunteers().await));
        });
    }
}

impl Component for VolunteersSection {
    type Message = VolunteersMsg;
    type Properties = SectionProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut section = Self {
            state: LoadState::Loading,
            dialog: None,
            notice: None,
            seq: 0,
        };
        if ctx.props().active {
            section.load(ctx);
        }
        section
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if should_reload(ctx.props(), old_props) {
            self.load(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            VolunteersMsg::Loaded(seq, result) => {
                if seq != self.seq {
                    return false;
                }
                self.state = match result {
                    Ok(volunteers) => LoadState::Loaded(volunteers),
                    Err(e) => {
                        log::error!("Error loading volunteers: {}", e);
                        LoadState::Failed(e)
                    }
                };
                true
            }
            VolunteersMsg::OpenEdit(id, status, hours) => {
                let status = if valid_volunteer_status(&status) {
                    status
                } else {
                    "applied".to_string()
                };
                self.dialog = Some(VolunteerDialog {
                    id,
                    status,
                    hours: hours.to_string(),
                });
                true
            }
            VolunteersMsg::StatusValue(value) => {
                if let Some(dialog) = &mut self.dialog {
                    dialog.status = value;
                }
                false
            }
            VolunteersMsg::HoursValue(value) => {
                if let Some(dialog) = &mut self.dialog {
                    dialog.hours = value;
                }
                false
            }
            VolunteersMsg::CloseDialog => {
                self.dialog = None;
                true
            }
            VolunteersMsg::Submit => {
                if let Some(dialog) = self.dialog.take() {
                    if !valid_volunteer_status(&dialog.status) {
                        self.notice = Some("Status tidak valid".to_string());
                        return true;
                    }
                    // часы проверяем до какого-либо запроса
                    let hours = match parse_hours(&dialog.hours) {
                        Ok(hours) => hours,
                        Err(message) => {
                            self.notice = Some(message);
                            return true;
                        }
                    };
                    let link = ctx.link().clone();
                    let status = dialog.status;
                    let id = dialog.id;
                    spawn_local(async move {
                        link.send_message(VolunteersMsg::Done(
                            api::update_volunteer(id, &status, hours).await,
                        ));
                    });
                }
                true
            }
            VolunteersMsg::Done(Ok(())) => {
                self.load(ctx);
                true
            }
            VolunteersMsg::Done(Err(e)) => {
                self.notice = Some(e);
                true
            }
            VolunteersMsg::DismissNotice => {
                self.notice = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match &self.state {
            LoadState::Loading => placeholder_row(7, "Memuat data..."),
            LoadState::Failed(_) => error_row(7),
            LoadState::Loaded(volunteers) if volunteers.is_empty() => {
                placeholder_row(7, "Tidak ada data relawan")
            }
            LoadState::Loaded(volunteers) => rows::volunteer_rows(volunteers)
                .into_iter()
                .map(|row| {
                    let id = row.id;
                    let status = row.status.clone();
                    let hours = row.hours;
                    let open = ctx
                        .link()
                        .callback(move |_| VolunteersMsg::OpenEdit(id, status.clone(), hours));
                    html! {
                        <tr key={row.id}>
                            <td>{ row.id }</td>
                            <td>{ &row.campaign }</td>
                            <td>{ &row.name }</td>
                            <td><span class={classes!("badge", format!("badge-{}", row.badge))}>{ &row.status }</span></td>
                            <td>{ row.hours }</td>
                            <td>{ &row.created }</td>
                            <td>
                                <button class="btn btn-sm btn-secondary" onclick={open}>{ "Update" }</button>
                            </td>
                        </tr>
                    }
                })
                .collect::<Html>(),
        };

        let dialog = match &self.dialog {
            Some(dialog) => {
                let onchange = ctx.link().callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    VolunteersMsg::StatusValue(select.value())
                });
                let oninput = ctx.link().callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    VolunteersMsg::HoursValue(input.value())
                });
                html! {
                    <Modal
                        title={format!("Update relawan #{}", dialog.id)}
                        on_confirm={ctx.link().callback(|_| VolunteersMsg::Submit)}
                        on_cancel={ctx.link().callback(|_| VolunteersMsg::CloseDialog)}
                    >
                        <label>{ "Status" }</label>
                        <select {onchange}>
                            { for VOLUNTEER_STATUSES.iter().copied().map(|status| html! {
                                <option value={status} selected={dialog.status.as_str() == status}>{ status }</option>
                            }) }
                        </select>
                        <label>{ "Jam kontribusi" }</label>
                        <input type="text" value={dialog.hours.clone()} {oninput} />
                    </Modal>
                }
            }
            None => html! {},
        };

        html! {
            <>
                if let Some(message) = &self.notice {
                    <Notice
                        message={message.clone()}
                        on_dismiss={ctx.link().callback(|_| VolunteersMsg::DismissNotice)}
                    />
                }
                <div class="table-container">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{ "ID" }</th>
                                <th>{ "Kampanye" }</th>
                                <th>{ "Pengguna" }</th>
                                <th>{ "Status" }</th>
                                <th>{ "Jam" }</th>
                                <th>{ "Tanggal" }</th>
                                <th>{ "Aksi" }</th>
                            </tr>
                        </thead>
                        <tbody>{ body }</tbody>
                    </table>
                </div>
                { dialog }
            </>
        }
    }
}

// ==================== Уведомления ====================

pub enum NotificationsMsg {
    Loaded(u32, Result<Vec<Notification>, String>),
    OpenDelete(i64),
    CloseDialog,
    ConfirmDelete,
    Done(Result<(), String>),
    DismissNotice,
}

pub struct NotificationsSection {
    state: LoadState<Vec<Notification>>,
    pending_delete: Option<i64>,
    notice: Option<String>,
    seq: u32,
}

impl NotificationsSection {
    fn load(&mut self, ctx: &Context<Self>) {
        self.seq += 1;
        let seq = self.seq;
        self.state = LoadState::Loading;
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(NotificationsMsg::Loaded(seq, api::notifications().await));
        });
    }
}

impl Component for NotificationsSection {
    type Message = NotificationsMsg;
    type Properties = SectionProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut section = Self {
            state: LoadState::Loading,
            pending_delete: None,
            notice: None,
            seq: 0,
        };
        if ctx.props().active {
            section.load(ctx);
        }
        section
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if should_reload(ctx.props(), old_props) {
            self.load(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            NotificationsMsg::Loaded(seq, result) => {
                if seq != self.seq {
                    return false;
                }
                self.state = match result {
                    Ok(notifications) => LoadState::Loaded(notifications),
                    Err(e) => {
                        log::error!("Error loading notifications: {}", e);
                        LoadState::Failed(e)
                    }
                };
                true
            }
            NotificationsMsg::OpenDelete(id) => {
                self.pending_delete = Some(id);
                true
            }
            NotificationsMsg::CloseDialog => {
                self.pending_delete = None;
                true
            }
            NotificationsMsg::ConfirmDelete => {
                if let Some(id) = self.pending_delete.take() {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        link.send_message(NotificationsMsg::Done(
                            api::delete_notification(id).await,
                        ));
                    });
                }
                true
            }
            NotificationsMsg::Done(Ok(())) => {
                self.load(ctx);
                true
            }
            NotificationsMsg::Done(Err(e)) => {
                self.notice = Some(e);
                true
            }
            NotificationsMsg::DismissNotice => {
                self.notice = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match &self.state {
            LoadState::Loading => placeholder_row(7, "Memuat data..."),
            LoadState::Failed(_) => error_row(7),
            LoadState::Loaded(notifications) if notifications.is_empty() => {
                placeholder_row(7, "Tidak ada data notifikasi")
            }
            LoadState::Loaded(notifications) => rows::notification_rows(notifications)
                .into_iter()
                .map(|row| {
                    let id = row.id;
                    let open_delete =
                        ctx.link().callback(move |_| NotificationsMsg::OpenDelete(id));
                    html! {
                        <tr key={row.id}>
                            <td>{ row.id }</td>
                            <td>{ &row.user }</td>
                            <td>{ &row.title }</td>
                            <td>{ &row.kind }</td>
                            <td><span class={classes!("badge", row.read_badge)}>{ row.read_label }</span></td>
                            <td>{ &row.created }</td>
                            <td>
                                <button class="btn btn-sm btn-danger" onclick={open_delete}>{ "Hapus" }</button>
                            </td>
                        </tr>
                    }
                })
                .collect::<Html>(),
        };

        let dialog = match self.pending_delete {
            Some(id) => html! {
                <Modal
                    title={format!("Hapus notifikasi #{}", id)}
                    danger=true
                    confirm_label="Hapus"
                    on_confirm={ctx.link().callback(|_| NotificationsMsg::ConfirmDelete)}
                    on_cancel={ctx.link().callback(|_| NotificationsMsg::CloseDialog)}
                >
                    <p>{ "Apakah Anda yakin ingin menghapus notifikasi ini?" }</p>
                </Modal>
            },
            None => html! {},
        };

        html! {
            <>
                if let Some(message) = &self.notice {
                    <Notice
                        message={message.clone()}
                        on_dismiss={ctx.link().callback(|_| NotificationsMsg::DismissNotice)}
                    />
                }
                <div class="table-container">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{ "ID" }</th>
                                <th>{ "Pengguna" }</th>
                                <th>{ "Judul" }</th>
                                <th>{ "Tipe" }</th>
                                <th>{ "Status" }</th>
                                <th>{ "Tanggal" }</th>
                                <th>{ "Aksi" }</th>
                            </tr>
                        </thead>
                        <tbody>{ body }</tbody>
                    </table>
                </div>
                { dialog }
            </>
        }
    }
}

// ==================== Аналитика likes ====================

pub enum LikesMsg {
    Loaded(u32, Result<Vec<TopPost>, String>),
}

pub struct LikesSection {
    state: LoadState<Vec<TopPost>>,
    seq: u32,
}

impl LikesSection {
    fn load(&mut self, ctx: &Context<Self>) {
        self.seq += 1;
        let seq = self.seq;
        self.state = LoadState::Loading;
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(LikesMsg::Loaded(seq, api::top_posts().await));
        });
    }
}

impl Component for LikesSection {
    type Message = LikesMsg;
    type Properties = SectionProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut section = Self {
            state: LoadState::Loading,
            seq: 0,
        };
        if ctx.props().active {
            section.load(ctx);
        }
        section
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if should_reload(ctx.props(), old_props) {
            self.load(ctx);
        }
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LikesMsg::Loaded(seq, result) => {
                if seq != self.seq {
                    return false;
                }
                self.state = match result {
                    Ok(posts) => LoadState::Loaded(posts),
                    Err(e) => {
                        log::error!("Error loading likes: {}", e);
                        LoadState::Failed(e)
                    }
                };
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let body = match &self.state {
            LoadState::Loading => placeholder_row(4, "Memuat data..."),
            LoadState::Failed(_) => error_row(4),
            LoadState::Loaded(posts) if posts.is_empty() => placeholder_row(4, "Tidak ada data"),
            LoadState::Loaded(posts) => rows::top_post_rows(posts)
                .into_iter()
                .map(|row| {
                    html! {
                        <tr key={row.post_id}>
                            <td>{ row.post_id }</td>
                            <td>{ &row.author }</td>
                            <td class="text-truncate">{ &row.text }</td>
                            <td>{ row.likes }</td>
                        </tr>
                    }
                })
                .collect::<Html>(),
        };

        html! {
            <div class="table-container">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{ "Post ID" }</th>
                            <th>{ "Pengguna" }</th>
                            <th>{ "Konten" }</th>
                            <th>{ "Jumlah Likes" }</th>
                        </tr>
                    </thead>
                    <tbody>{ body }</tbody>
                </table>
            </div>
        }
    }
}
