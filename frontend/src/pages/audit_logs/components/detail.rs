use leptos::*;

use crate::{api::AuditLogEntry, utils::time::local_datetime};

#[component]
fn Field(#[prop(into)] label: String, children: Children) -> impl IntoView {
    view! {
        <div>
            <p class="text-fg-muted">{label}</p>
            <div class="font-medium text-fg">{children()}</div>
        </div>
    }
}

#[component]
pub fn AuditLogDetail(log: AuditLogEntry) -> impl IntoView {
    let actor_href = format!("/audit-logs?actorId={}", log.actor_id);
    view! {
        <div class="p-6">
            <div class="rounded-lg border border-border bg-surface-elevated shadow-sm">
                <div class="border-b border-border px-6 py-4">
                    <h2 class="text-lg font-semibold text-fg">"監査ログ詳細"</h2>
                </div>
                <div class="space-y-4 px-6 py-4">
                    <div class="grid grid-cols-2 gap-4 text-sm">
                        <Field label="ID">{log.id}</Field>
                        <Field label="日時">{local_datetime(&log.timestamp)}</Field>
                        <Field label="アクション">
                            <span class="rounded border border-border px-1.5 text-xs">{log.action.label()}</span>
                        </Field>
                        <Field label="対象種別">{log.target_type.label()}</Field>
                        <Field label="実行者">
                            <a href=actor_href class="hover:underline">
                                {format!("{} (ID: {})", log.actor_name, log.actor_id)}
                            </a>
                        </Field>
                        <Field label="対象ID">{log.target_id}</Field>
                    </div>
                    <div>
                        <p class="text-sm text-fg-muted">"詳細"</p>
                        <p class="mt-1 text-sm text-fg">{log.details.clone()}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::AuditAction;
    use crate::test_support::helpers::sample_audit_log;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_every_field() {
        let html = render_to_string(move || {
            view! { <AuditLogDetail log=sample_audit_log(8, AuditAction::TodoCompleted) /> }
        });
        assert!(html.contains("監査ログ詳細"));
        assert!(html.contains("ToDo完了"));
        assert!(html.contains("管理者 (ID: 1)"));
        assert!(html.contains("/audit-logs?actorId=1"));
        assert!(html.contains("ToDo「資料作成」を完了しました"));
        for label in ["日時", "対象種別", "対象ID"] {
            assert!(html.contains(label));
        }
    }
}
