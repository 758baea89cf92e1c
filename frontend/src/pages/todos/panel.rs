use leptos::*;
use leptos_router::{use_location, use_navigate, use_params_map, NavigateOptions, Outlet};

use crate::{
    api::Todo,
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
        master_detail::MasterDetailLayout,
    },
    state::{
        list::{use_detail_state, use_list_state, DetailState, ListReload, ListState},
        search::{
            href_with_query, selected_id_from_path, to_query_string, use_search_state,
            use_update_search, TodoSearch,
        },
    },
};

use super::{
    components::{
        create_form::TodoCreateForm, detail::TodoDetail, list_header::TodoListHeader,
        list_pane::TodoListPane,
    },
    repository::TodosRepository,
};

const BASE_PATH: &str = "/todos";

fn list_href(search: &TodoSearch) -> String {
    href_with_query(BASE_PATH, &to_query_string(search))
}

fn detail_href(id: u64, search: &TodoSearch) -> String {
    href_with_query(&format!("{}/{}", BASE_PATH, id), &to_query_string(search))
}

/// Master/detail shell for `/todos`; the child route renders into the detail pane.
#[component]
pub fn TodosPage() -> impl IntoView {
    let repository = TodosRepository::from_context();
    let reload = ListReload::provide();
    let search = use_search_state::<TodoSearch>();
    let update_search = use_update_search(search);
    let location = use_location();
    let selected = Signal::derive(move || {
        location
            .pathname
            .with(|path| selected_id_from_path(path, BASE_PATH))
    });

    let state = use_list_state(search, reload.0, move |search: TodoSearch| {
        let repo = repository.clone();
        async move { repo.list(search).await }
    });
    let total = Signal::derive(move || state.with(ListState::total));

    view! {
        <Layout>
            <MasterDetailLayout
                list=view! {
                    <TodoListHeader search=search total=total on_update=update_search />
                    <TodoListPane
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
pub fn TodosIndex() -> impl IntoView {
    view! {
        <EmptyState
            title="ToDoを選択してください"
            description="左の一覧からToDoを選択すると、詳細が表示されます"
        />
    }
}

#[component]
pub fn TodoDetailPage() -> impl IntoView {
    let repository = TodosRepository::from_context();
    let reload = ListReload::use_context();
    let search = use_search_state::<TodoSearch>();
    let params = use_params_map();
    let id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<u64>().ok()))
    });

    let state = use_detail_state(id, create_rw_signal(0), move |id| {
        let repo = repository.clone();
        async move { repo.get(id).await }
    });

    let on_saved = Callback::new(move |todo: Todo| {
        state.set(DetailState::Loaded(todo));
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
                view! { <EmptyState title="ToDoが見つかりません" /> }.into_view()
            }
            DetailState::Failed(err) => {
                view! { <div class="p-6"><ErrorMessage message=err.message /></div> }.into_view()
            }
            DetailState::Loaded(todo) => {
                view! { <TodoDetail todo=todo on_saved=on_saved on_deleted=on_deleted /> }
                    .into_view()
            }
        }}
    }
}

#[component]
pub fn TodoCreatePage() -> impl IntoView {
    let reload = ListReload::use_context();
    let search = use_search_state::<TodoSearch>();
    let navigate = use_navigate();

    let to_detail = navigate.clone();
    let on_created = Callback::new(move |todo: Todo| {
        reload.bump();
        to_detail(
            &detail_href(todo.id, &search.get_untracked()),
            NavigateOptions::default(),
        );
    });
    let on_cancel = Callback::new(move |_| {
        navigate(&list_href(&search.get_untracked()), NavigateOptions::default());
    });

    view! { <TodoCreateForm on_created=on_created on_cancel=on_cancel /> }
}
