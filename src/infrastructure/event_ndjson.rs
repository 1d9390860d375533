use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::GraphBuilt {
            nodes,
            edges,
            dropped_edges,
            duplicate_edges,
        } => {
            json!({"type":"graph_built","nodes":nodes,"edges":edges,"dropped_edges":dropped_edges,"duplicate_edges":duplicate_edges})
        }
        AppEvent::SccComputed {
            algorithm,
            components,
            non_trivial_components,
            cyclic_components,
            largest_component,
            micros,
        } => {
            json!({"type":"scc_computed","algorithm":algorithm,"components":components,"non_trivial_components":non_trivial_components,"cyclic_components":cyclic_components,"largest_component":largest_component,"micros":micros})
        }
        AppEvent::PartitionsCompared { components, agree } => {
            json!({"type":"partitions_compared","components":components,"agree":agree})
        }
        AppEvent::IndexBuilt {
            indexed_components,
            indexed_nodes,
        } => {
            json!({"type":"index_built","indexed_components":indexed_components,"indexed_nodes":indexed_nodes})
        }
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::stats::AnalysisStats;

    #[test]
    fn app_event_to_json_covers_all_variants() {
        let v = app_event_to_json(&AppEvent::PhaseStarted {
            name: "x".to_string(),
        });
        assert_eq!(v["type"], "phase_started");

        let v = app_event_to_json(&AppEvent::PhaseFinished {
            name: "x".to_string(),
        });
        assert_eq!(v["type"], "phase_finished");

        let v = app_event_to_json(&AppEvent::GraphBuilt {
            nodes: 3,
            edges: 2,
            dropped_edges: 1,
            duplicate_edges: 0,
        });
        assert_eq!(v["type"], "graph_built");
        assert_eq!(v["dropped_edges"], 1);

        let v = app_event_to_json(&AppEvent::SccComputed {
            algorithm: "tarjan".to_string(),
            components: 2,
            non_trivial_components: 1,
            cyclic_components: 1,
            largest_component: 2,
            micros: 15,
        });
        assert_eq!(v["type"], "scc_computed");
        assert_eq!(v["algorithm"], "tarjan");

        let v = app_event_to_json(&AppEvent::PartitionsCompared {
            components: 2,
            agree: true,
        });
        assert_eq!(v["type"], "partitions_compared");
        assert_eq!(v["agree"], true);

        let v = app_event_to_json(&AppEvent::IndexBuilt {
            indexed_components: 1,
            indexed_nodes: 2,
        });
        assert_eq!(v["type"], "index_built");

        let v = app_event_to_json(&AppEvent::Finished {
            stats: AnalysisStats::default(),
        });
        assert_eq!(v["type"], "finished");
        assert_eq!(v["stats"]["nodes"], 0);
    }

    #[tokio::test]
    async fn spawn_ndjson_printer_drains_and_exits() {
        let (tx, rx) = mpsc::channel::<AppEvent>(8);
        let handle = spawn_ndjson_printer(rx);

        tx.send(AppEvent::PhaseStarted {
            name: "x".to_string(),
        })
        .await
        .expect("send");
        drop(tx);

        handle.await.expect("join");
    }
}
