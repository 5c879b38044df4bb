pub fn render_index(responsibles: &[String], statuses: &[&str]) -> String {
    INDEX_HTML
        .replace("{{RESPONSIBLE_OPTIONS}}", &render_options(responsibles))
        .replace("{{STATUS_OPTIONS}}", &render_options(statuses))
}

fn render_options<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|value| {
            let value = escape_html(value.as_ref());
            format!(r#"<option value="{value}">{value}</option>"#)
        })
        .collect::<Vec<_>>()
        .join("\n          ")
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Action Tracker</title>
  <style>
    :root {
      --bg: #f4f6f9;
      --ink: #1f2933;
      --muted: #6b7280;
      --primary: #007bff;
      --success: #28a745;
      --danger: #dc3545;
      --late-row: #ffbaba;
      --card: #ffffff;
      --shadow: 0 12px 32px rgba(31, 41, 51, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: Arial, "Helvetica Neue", sans-serif;
      padding: 20px;
    }

    .app {
      width: min(1280px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    h1 {
      text-align: center;
      margin: 16px 0 8px;
      font-size: clamp(1.8rem, 3vw, 2.4rem);
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.4rem;
    }

    .filters {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
      gap: 16px;
    }

    .filter {
      display: grid;
      gap: 6px;
    }

    .filter label {
      font-weight: 600;
    }

    .filter select {
      min-height: 110px;
      padding: 6px;
      border-radius: 8px;
      border: 1px solid #cbd2d9;
      font-size: 0.95rem;
    }

    .filter .hint {
      margin: 0;
      font-size: 0.8rem;
      color: var(--muted);
    }

    .clear {
      justify-self: start;
      background: none;
      border: none;
      color: var(--primary);
      padding: 0;
      cursor: pointer;
      font-size: 0.85rem;
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    .card {
      border-radius: 12px;
      padding: 18px 22px;
      color: white;
      box-shadow: var(--shadow);
    }

    .card.total { background: var(--primary); }
    .card.on-time { background: var(--success); }
    .card.late { background: var(--danger); }

    .card .label {
      display: block;
      font-size: 1.05rem;
    }

    .card .value {
      display: block;
      font-size: 2.2rem;
      font-weight: 700;
      margin-top: 6px;
    }

    .panel {
      background: var(--card);
      border-radius: 12px;
      padding: 18px;
      box-shadow: var(--shadow);
    }

    .table-wrap {
      max-height: 250px;
      overflow-y: auto;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 14px;
    }

    th {
      position: sticky;
      top: 0;
      background: var(--primary);
      color: white;
      font-weight: bold;
      text-align: center;
      padding: 10px;
    }

    td {
      text-align: left;
      padding: 10px;
      border: 1px solid grey;
      white-space: normal;
    }

    tbody tr:nth-child(even) {
      background: rgb(248, 248, 248);
    }

    tbody tr.late {
      background: var(--late-row);
      color: black;
    }

    .charts {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(420px, 1fr));
      gap: 16px;
    }

    .chart-card h3 {
      margin: 0 0 8px;
      font-size: 1rem;
      color: var(--muted);
    }

    .chart-card svg {
      width: 100%;
      height: 300px;
      display: block;
    }

    .chart-bar {
      fill: #636efa;
    }

    .chart-grid {
      stroke: rgba(31, 41, 51, 0.1);
    }

    .chart-label {
      fill: #52606d;
      font-size: 11px;
    }

    .chart-value {
      fill: #1f2933;
      font-size: 12px;
      font-weight: 600;
    }

    .status {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    @media (max-width: 600px) {
      .charts {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>Action Tracker: Open Actions</h1>

    <section class="filters">
      <div class="filter">
        <label for="responsible-filter">Responsible:</label>
        <select id="responsible-filter" multiple>
          {{RESPONSIBLE_OPTIONS}}
        </select>
        <button class="clear" type="button" data-clear="responsible-filter">Clear</button>
      </div>
      <div class="filter">
        <label for="status-filter">Status:</label>
        <select id="status-filter" multiple>
          {{STATUS_OPTIONS}}
        </select>
        <button class="clear" type="button" data-clear="status-filter">Clear</button>
      </div>
    </section>
    <p class="hint">Nothing selected means no filtering. Hold Ctrl/Cmd to select several values.</p>

    <section class="cards">
      <div class="card total">
        <span class="label">Total Actions</span>
        <span class="value" id="total-actions">-</span>
      </div>
      <div class="card on-time">
        <span class="label">On Time</span>
        <span class="value" id="on-time-actions">-</span>
      </div>
      <div class="card late">
        <span class="label">Late</span>
        <span class="value" id="late-actions">-</span>
      </div>
    </section>

    <div class="status" id="status"></div>

    <section class="panel">
      <h2>Actions Table</h2>
      <div class="table-wrap">
        <table id="table">
          <thead></thead>
          <tbody></tbody>
        </table>
      </div>
    </section>

    <section class="panel">
      <h2>Total Actions by Responsible</h2>
      <div class="charts">
        <div class="chart-card">
          <h3 id="bar-total-title"></h3>
          <svg id="bar-total" viewBox="0 0 600 300" role="img"></svg>
        </div>
        <div class="chart-card">
          <h3 id="pie-total-title"></h3>
          <svg id="pie-total" viewBox="0 0 600 300" role="img"></svg>
        </div>
      </div>
    </section>

    <section class="panel">
      <h2>Late Actions by Responsible</h2>
      <div class="charts">
        <div class="chart-card">
          <h3 id="bar-late-title"></h3>
          <svg id="bar-late" viewBox="0 0 600 300" role="img"></svg>
        </div>
        <div class="chart-card">
          <h3 id="pie-late-title"></h3>
          <svg id="pie-late" viewBox="0 0 600 300" role="img"></svg>
        </div>
      </div>
    </section>
  </main>

  <script>
    const responsibleEl = document.getElementById('responsible-filter');
    const statusFilterEl = document.getElementById('status-filter');
    const statusEl = document.getElementById('status');
    const totalEl = document.getElementById('total-actions');
    const onTimeEl = document.getElementById('on-time-actions');
    const lateEl = document.getElementById('late-actions');
    const tableHead = document.querySelector('#table thead');
    const tableBody = document.querySelector('#table tbody');

    const PALETTE = ['#636efa', '#ef553b', '#00cc96', '#ab63fa', '#ffa15a', '#19d3f3', '#ff6692', '#b6e880', '#ff97ff', '#fecb52'];

    let latestRequest = 0;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (value) =>
      String(value)
        .replace(/&/g, '&amp;')
        .replace(/</g, '&lt;')
        .replace(/>/g, '&gt;')
        .replace(/"/g, '&quot;');

    const selectedValues = (select) =>
      Array.from(select.selectedOptions).map((option) => option.value);

    const formatCell = (value) => (value === null || value === undefined ? '' : value);

    const renderTable = (table) => {
      const statusIndex = table.columns.findIndex((column) => column.id === 'Status');
      tableHead.innerHTML = `<tr>${table.columns.map((column) => `<th>${escapeHtml(column.name)}</th>`).join('')}</tr>`;
      tableBody.innerHTML = table.rows
        .map((row) => {
          const late = statusIndex >= 0 && row[statusIndex] === 'Late';
          const cells = row.map((cell) => `<td>${escapeHtml(formatCell(cell))}</td>`).join('');
          return `<tr${late ? ' class="late"' : ''}>${cells}</tr>`;
        })
        .join('');
    };

    const renderEmpty = (svg) => {
      svg.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data</text>';
    };

    const renderBarChart = (svg, chart) => {
      document.getElementById(`${svg.id}-title`).textContent = chart.title;
      if (!chart.bars.length) {
        renderEmpty(svg);
        return;
      }

      const width = 600;
      const height = 300;
      const left = 48;
      const right = 16;
      const top = 24;
      const bottom = 48;
      const max = Math.max(...chart.bars.map((bar) => bar.value), 1);
      const slot = (width - left - right) / chart.bars.length;
      const barWidth = Math.min(slot * 0.7, 80);
      const scaleY = (height - top - bottom) / max;

      let grid = '';
      const ticks = Math.min(max, 4);
      for (let i = 0; i <= ticks; i += 1) {
        const value = Math.round((max * i) / ticks);
        const y = height - bottom - value * scaleY;
        grid += `<line class="chart-grid" x1="${left}" y1="${y}" x2="${width - right}" y2="${y}" />`;
        grid += `<text class="chart-label" x="${left - 8}" y="${y + 4}" text-anchor="end">${value}</text>`;
      }

      const bars = chart.bars
        .map((bar, index) => {
          const x = left + index * slot + (slot - barWidth) / 2;
          const barHeight = bar.value * scaleY;
          const y = height - bottom - barHeight;
          const center = x + barWidth / 2;
          return `
            <rect class="chart-bar" x="${x}" y="${y}" width="${barWidth}" height="${barHeight}"><title>${escapeHtml(bar.label)}: ${bar.value}</title></rect>
            <text class="chart-value" x="${center}" y="${y - 6}" text-anchor="middle">${bar.value}</text>
            <text class="chart-label" x="${center}" y="${height - bottom + 18}" text-anchor="middle">${escapeHtml(bar.label)}</text>`;
        })
        .join('');

      svg.innerHTML = `
        ${grid}
        ${bars}
        <text class="chart-label" x="${width / 2}" y="${height - 8}" text-anchor="middle">${escapeHtml(chart.x_label)}</text>
        <text class="chart-label" x="12" y="${height / 2}" text-anchor="middle" transform="rotate(-90 12 ${height / 2})">${escapeHtml(chart.y_label)}</text>
      `;
    };

    const renderPieChart = (svg, chart) => {
      document.getElementById(`${svg.id}-title`).textContent = chart.title;
      if (!chart.slices.length) {
        renderEmpty(svg);
        return;
      }

      const cx = 170;
      const cy = 150;
      const r = 120;
      let angle = -Math.PI / 2;
      let wedges = '';
      let legend = '';

      chart.slices.forEach((slice, index) => {
        const color = PALETTE[index % PALETTE.length];
        const sweep = (slice.share / 100) * Math.PI * 2;
        const label = `${escapeHtml(slice.label)}: ${slice.value} (${slice.share.toFixed(1)}%)`;
        if (chart.slices.length === 1) {
          wedges += `<circle cx="${cx}" cy="${cy}" r="${r}" fill="${color}"><title>${label}</title></circle>`;
        } else {
          const x1 = cx + r * Math.cos(angle);
          const y1 = cy + r * Math.sin(angle);
          const x2 = cx + r * Math.cos(angle + sweep);
          const y2 = cy + r * Math.sin(angle + sweep);
          const large = sweep > Math.PI ? 1 : 0;
          wedges += `<path d="M ${cx} ${cy} L ${x1} ${y1} A ${r} ${r} 0 ${large} 1 ${x2} ${y2} Z" fill="${color}" stroke="white" stroke-width="1"><title>${label}</title></path>`;
        }
        angle += sweep;

        const legendY = 40 + index * 22;
        legend += `<rect x="330" y="${legendY - 10}" width="12" height="12" fill="${color}" />`;
        legend += `<text class="chart-label" x="348" y="${legendY}">${label}</text>`;
      });

      svg.innerHTML = wedges + legend;
    };

    const applyView = (view) => {
      renderTable(view.table);
      totalEl.textContent = view.counters.total;
      onTimeEl.textContent = view.counters.on_time;
      lateEl.textContent = view.counters.late;
      renderBarChart(document.getElementById('bar-total'), view.charts.total_bar);
      renderPieChart(document.getElementById('pie-total'), view.charts.total_pie);
      renderBarChart(document.getElementById('bar-late'), view.charts.late_bar);
      renderPieChart(document.getElementById('pie-late'), view.charts.late_pie);
    };

    const refresh = async () => {
      const request = ++latestRequest;
      setStatus('Refreshing...', 'info');
      const res = await fetch('/api/view', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({
          responsible: selectedValues(responsibleEl),
          status: selectedValues(statusFilterEl)
        })
      });

      if (request !== latestRequest) {
        return;
      }
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Unable to refresh dashboard');
      }

      const view = await res.json();
      if (request !== latestRequest) {
        return;
      }
      applyView(view);
      setStatus('', '');
    };

    const refreshSafely = () => {
      const request = latestRequest + 1;
      refresh().catch((err) => {
        if (request === latestRequest) {
          setStatus(err.message, 'error');
        }
      });
    };

    responsibleEl.addEventListener('change', refreshSafely);
    statusFilterEl.addEventListener('change', refreshSafely);

    document.querySelectorAll('[data-clear]').forEach((button) => {
      button.addEventListener('click', () => {
        const select = document.getElementById(button.dataset.clear);
        Array.from(select.options).forEach((option) => {
          option.selected = false;
        });
        refreshSafely();
      });
    });

    refreshSafely();
  </script>
</body>
</html>
"#;
