use yew::prelude::*;

use crate::presentation::RecordRow;

#[derive(Properties, PartialEq)]
pub struct RecordsTableProps {
    pub heading: String,
    pub rows: Vec<RecordRow>,
}

#[function_component(RecordsTable)]
pub fn records_table(props: &RecordsTableProps) -> Html {
    html! {
        <div class="data-section">
            <h3>{ &props.heading }</h3>
            <div class="table-container">
                <table class="records-table">
                    <thead>
                        <tr>
                            <th>{ "ID" }</th>
                            <th>{ "Name" }</th>
                            <th>{ "Type" }</th>
                            <th>{ "Created" }</th>
                            <th>{ "Modified" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for props.rows.iter().map(|row| html! {
                            <tr key={row.key.clone()}>
                                <td>{ &row.id }</td>
                                <td>{ &row.name }</td>
                                <td>{ &row.item_type }</td>
                                <td>{ &row.created }</td>
                                <td>{ &row.modified }</td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
