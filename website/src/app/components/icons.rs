use leptos::prelude::*;

#[component]
fn IconFrame(children: Children) -> impl IntoView {
    view! {
        <svg
            class="w-4 h-4"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn PlusIcon() -> impl IntoView {
    view! {
        <IconFrame>
            <path d="M5 12h14" />
            <path d="M12 5v14" />
        </IconFrame>
    }
}

#[component]
pub fn LogOutIcon() -> impl IntoView {
    view! {
        <IconFrame>
            <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" />
            <polyline points="16 17 21 12 16 7" />
            <line x1="21" x2="9" y1="12" y2="12" />
        </IconFrame>
    }
}

#[component]
pub fn EyeIcon() -> impl IntoView {
    view! {
        <IconFrame>
            <path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z" />
            <circle cx="12" cy="12" r="3" />
        </IconFrame>
    }
}

#[component]
pub fn EditIcon() -> impl IntoView {
    view! {
        <IconFrame>
            <path d="M12 20h9" />
            <path d="M16.5 3.5a2.121 2.121 0 0 1 3 3L7 19l-4 1 1-4L16.5 3.5z" />
        </IconFrame>
    }
}

#[component]
pub fn TrashIcon() -> impl IntoView {
    view! {
        <IconFrame>
            <path d="M3 6h18" />
            <path d="M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6" />
            <path d="M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2" />
            <line x1="10" x2="10" y1="11" y2="17" />
            <line x1="14" x2="14" y1="11" y2="17" />
        </IconFrame>
    }
}

#[component]
pub fn CloseIcon() -> impl IntoView {
    view! {
        <IconFrame>
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        </IconFrame>
    }
}
