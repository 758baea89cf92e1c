use leptos::*;
use leptos_router::{use_location, use_navigate, use_params_map, NavigateOptions, Outlet};

use crate::{
    api::User,
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
        master_detail::MasterDetailLayout,
    },
    state::{
        list::{use_detail_state, use_list_state, DetailState, ListReload, ListState},
        search::{
            href_with_query, selected_id_from_path, to_query_string, use_search_state,
            use_update_search, UserSearch,
        },
    },
};

use super::{
    components::{
        create_form::UserCreateForm, detail::UserDetail, list_header::UserListHeader,
        list_pane::UserListPane,
    },
    repository::UsersRepository,
};

const BASE_PATH: &str = "/users";

fn list_href(search: &UserSearch) -> String {
    href_with_query(BASE_PATH, &to_query_string(search))
}

fn detail_href(id: u64, search: &UserSearch) -> String {
    href_with_query(&format!("{}/{}", BASE_PATH, id), &to_query_string(search))
}

/// Master/detail shell for `/users`; the child route renders into the detail pane.
#[component]
pub fn UsersPage() -> impl IntoView {
    let repository = UsersRepository::from_context();
    let reload = ListReload::provide();
    let search = use_search_state::<UserSearch>();
    let update_search = use_update_search(search);
    let location = use_location();
    let selected = Signal::derive(move || {
        location
            .pathname
            .with(|path| selected_id_from_path(path, BASE_PATH))
    });

    let state = use_list_state(search, reload.0, move |search: UserSearch| {
        let repo = repository.clone();
        async move { repo.list(search).await }
    });
    let total = Signal::derive(move || state.with(ListState::total));

    view! {
        <Layout>
            <MasterDetailLayout
                list=view! {
                    <UserListHeader search=search total=total on_update=update_search />
                    <UserListPane
                        state=state
                        search=search
                        selected=selected
                        on_update=update_search
                    />
                }
                    .into_view()
                detail=view! { <Outlet /> }.into_view()
            />
        </Layout>
    }
}

#[component]
pub fn UsersIndex() -> impl IntoView {
    view! {
        <EmptyState
            title="ユーザーを選択してください"
            description="左の一覧からユーザーを選択すると、詳細が表示されます"
        />
    }
}

#[component]
pub fn UserDetailPage() -> impl IntoView {
    let repository = UsersRepository::from_context();
    let reload = ListReload::use_context();
    let search = use_search_state::<UserSearch>();
    let params = use_params_map();
    let id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<u64>().ok()))
    });

    let state = use_detail_state(id, create_rw_signal(0), move |id| {
        let repo = repository.clone();
        async move { repo.get(id).await }
    });

    let on_saved = Callback::new(move |user: User| {
        state.set(DetailState::Loaded(user));
        reload.bump();
    });
    let navigate = use_navigate();
    let on_deleted = Callback::new(move |_| {
        reload.bump();
        navigate(&list_href(&search.get_untracked()), NavigateOptions::default());
    });

    view! {
        {move || match state.get() {
            DetailState::Loading => view! { <LoadingSpinner /> }.into_view(),
            DetailState::NotFound => {
                view! { <EmptyState title="ユーザーが見つかりません" /> }.into_view()
            }
            DetailState::Failed(err) => {
                view! { <div class="p-6"><ErrorMessage message=err.message /></div> }.into_view()
            }
            DetailState::Loaded(user) => {
                view! { <UserDetail user=user on_saved=on_saved on_deleted=on_deleted /> }
                    .into_view()
            }
        }}
    }
}

#[component]
pub fn UserCreatePage() -> impl IntoView {
    let reload = ListReload::use_context();
    let search = use_search_state::<UserSearch>();
    let navigate = use_navigate();

    let to_detail = navigate.clone();
    let on_created = Callback::new(move |user: User| {
        reload.bump();
        to_detail(
            &detail_href(user.id, &search.get_untracked()),
            NavigateOptions::default(),
        );
    });
    let on_cancel = Callback::new(move |_| {
        navigate(&list_href(&search.get_untracked()), NavigateOptions::default());
    });

    view! { <UserCreateForm on_created=on_created on_cancel=on_cancel /> }
}
