pub fn render_index(total: usize, open: usize) -> String {
    INDEX_HTML
        .replace("{{TOTAL}}", &total.to_string())
        .replace("{{OPEN}}", &open.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Support Tickets</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3f6;
      --bg-2: #c9dde8;
      --ink: #22313a;
      --muted: #5f707a;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
      --open: #ff6b4a;
      --in_progress: #f2b134;
      --closed: #3c8d7a;
      --high: #d64545;
      --medium: #f2b134;
      --low: #5b8bd6;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f7fafc 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(980px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1, h2 {
      font-family: "Fraunces", Georgia, serif;
      margin: 0;
    }

    h2 {
      font-size: 1.25rem;
      margin-bottom: 12px;
    }

    header {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 16px;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 10px 20px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button.secondary {
      background: transparent;
      color: var(--accent-2);
      border: 2px solid var(--accent-2);
    }

    form {
      display: grid;
      gap: 12px;
    }

    textarea, select {
      font: inherit;
      border-radius: 12px;
      border: 1px solid #c8d3da;
      padding: 8px 10px;
      background: white;
    }

    textarea {
      min-height: 80px;
      resize: vertical;
    }

    .banner {
      border-radius: 14px;
      padding: 12px 16px;
      display: flex;
      justify-content: space-between;
      gap: 12px;
      align-items: center;
    }

    .banner[hidden] {
      display: none;
    }

    .banner[data-type="ok"] {
      background: #e3f4ee;
    }

    .banner[data-type="error"] {
      background: #fde6e1;
    }

    .banner[data-type="info"] {
      background: #e7eef6;
    }

    .banner button {
      padding: 4px 10px;
      background: transparent;
      color: var(--ink);
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.95rem;
    }

    th, td {
      text-align: left;
      padding: 8px 6px;
      border-bottom: 1px solid #e2e8ec;
      vertical-align: top;
    }

    .metrics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .metric {
      background: white;
      border-radius: 18px;
      padding: 16px;
    }

    .metric span {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .metric strong {
      display: block;
      font-size: 2rem;
    }

    .charts {
      display: grid;
      grid-template-columns: 2fr 1fr;
      gap: 20px;
    }

    svg {
      width: 100%;
      height: auto;
    }

    .chart-label {
      font-size: 11px;
      fill: var(--muted);
    }

    .chart-grid {
      stroke: #e2e8ec;
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    .legend i {
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 50%;
      margin-right: 6px;
    }

    @media (max-width: 720px) {
      .charts {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Support tickets</h1>
      <button id="reset" class="secondary" type="button">Reset session</button>
    </header>

    <div id="banner" class="banner" hidden>
      <span id="banner-text"></span>
      <button id="banner-close" type="button" aria-label="Dismiss">&times;</button>
    </div>

    <section>
      <h2>Add a ticket</h2>
      <form id="create-form">
        <textarea id="description" placeholder="Describe the problem" required></textarea>
        <select id="priority">
          <option value="High">High</option>
          <option value="Medium">Medium</option>
          <option value="Low">Low</option>
        </select>
        <button type="submit">Submit</button>
      </form>
    </section>

    <section>
      <h2>Existing tickets</h2>
      <p>Number of tickets: <strong id="total">{{TOTAL}}</strong></p>
      <table>
        <thead>
          <tr><th>ID</th><th>Description</th><th>Status</th><th>Priority</th><th>Submitted</th></tr>
        </thead>
        <tbody id="rows"></tbody>
      </table>
    </section>

    <section>
      <h2>Statistics</h2>
      <div class="metrics">
        <div class="metric"><span>Open tickets</span><strong id="open">{{OPEN}}</strong></div>
      </div>
    </section>

    <section class="charts">
      <div>
        <h2>Status by month</h2>
        <svg id="status-chart" viewBox="0 0 600 260" role="img" aria-label="Ticket status by month"></svg>
        <div class="legend" id="status-legend"></div>
      </div>
      <div>
        <h2>Priorities</h2>
        <svg id="priority-chart" viewBox="0 0 220 220" role="img" aria-label="Ticket priorities"></svg>
        <div class="legend" id="priority-legend"></div>
      </div>
    </section>
  </main>

  <script>
    const STATUSES = [
      { key: 'open', label: 'Open' },
      { key: 'in_progress', label: 'In Progress' },
      { key: 'closed', label: 'Closed' }
    ];
    const PRIORITIES = [
      { key: 'high', label: 'High' },
      { key: 'medium', label: 'Medium' },
      { key: 'low', label: 'Low' }
    ];

    const rowsEl = document.getElementById('rows');
    const totalEl = document.getElementById('total');
    const openEl = document.getElementById('open');
    const bannerEl = document.getElementById('banner');
    const bannerText = document.getElementById('banner-text');
    const statusChart = document.getElementById('status-chart');
    const priorityChart = document.getElementById('priority-chart');

    let tickets = [];

    const cssVar = (name) => getComputedStyle(document.documentElement).getPropertyValue(`--${name}`).trim();

    const escapeHtml = (value) =>
      value.replace(/[&<>"']/g, (ch) => ({ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;' })[ch]);

    const showBanner = (message, type) => {
      bannerText.textContent = message;
      bannerEl.dataset.type = type;
      bannerEl.hidden = false;
    };

    document.getElementById('banner-close').addEventListener('click', () => {
      bannerEl.hidden = true;
    });

    const request = async (method, url, body) => {
      const res = await fetch(url, {
        method,
        headers: body ? { 'content-type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const select = (options, current, field, index) => {
      const items = options
        .map((opt) => `<option value="${opt.key}"${opt.key === current ? ' selected' : ''}>${opt.label}</option>`)
        .join('');
      return `<select data-field="${field}" data-index="${index}">${items}</select>`;
    };

    const renderTable = () => {
      totalEl.textContent = tickets.length;
      rowsEl.innerHTML = tickets
        .map((ticket, index) => `
          <tr>
            <td>${ticket.id}</td>
            <td>${escapeHtml(ticket.description)}</td>
            <td>${select(STATUSES, ticket.status, 'status', index)}</td>
            <td>${select(PRIORITIES, ticket.priority, 'priority', index)}</td>
            <td>${ticket.submitted_date}</td>
          </tr>`)
        .join('');
    };

    const renderLegend = (el, items) => {
      el.innerHTML = items.map((item) => `<span><i style="background:${cssVar(item.key)}"></i>${item.label}</span>`).join('');
    };

    const renderStatusChart = (months) => {
      if (!months.length) {
        statusChart.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No tickets yet</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 40;
      const paddingY = 30;
      const top = 16;
      const max = Math.max(1, ...months.flatMap((m) => STATUSES.map((s) => m[s.key])));
      const groupWidth = (width - paddingX * 2) / months.length;
      const barWidth = Math.min(28, (groupWidth - 12) / STATUSES.length);
      const scaleY = (height - top - paddingY) / max;

      let grid = '';
      for (let i = 0; i <= 4; i += 1) {
        const value = Math.round((max * i) / 4);
        const y = height - paddingY - value * scaleY;
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${y}" x2="${width - paddingX}" y2="${y}" />`;
        grid += `<text class="chart-label" x="${paddingX - 8}" y="${y + 4}" text-anchor="end">${value}</text>`;
      }

      const bars = months
        .map((month, g) => {
          const start = paddingX + g * groupWidth + (groupWidth - barWidth * STATUSES.length) / 2;
          const rects = STATUSES.map((status, i) => {
            const h = month[status.key] * scaleY;
            return `<rect x="${start + i * barWidth}" y="${height - paddingY - h}" width="${barWidth - 2}" height="${h}" rx="3" fill="${cssVar(status.key)}" />`;
          }).join('');
          const label = `<text class="chart-label" x="${paddingX + g * groupWidth + groupWidth / 2}" y="${height - paddingY + 18}" text-anchor="middle">${month.month}</text>`;
          return rects + label;
        })
        .join('');

      statusChart.innerHTML = grid + bars;
    };

    const renderPriorityChart = (distribution) => {
      const total = PRIORITIES.reduce((acc, p) => acc + (distribution[p.key] || 0), 0);
      if (!total) {
        priorityChart.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No tickets yet</text>';
        return;
      }

      const cx = 110;
      const cy = 110;
      const r = 100;
      let angle = -Math.PI / 2;
      priorityChart.innerHTML = PRIORITIES.filter((p) => distribution[p.key])
        .map((p) => {
          const share = distribution[p.key] / total;
          if (share === 1) {
            return `<circle cx="${cx}" cy="${cy}" r="${r}" fill="${cssVar(p.key)}" />`;
          }
          const end = angle + share * Math.PI * 2;
          const large = share > 0.5 ? 1 : 0;
          const path = `M ${cx} ${cy} L ${cx + r * Math.cos(angle)} ${cy + r * Math.sin(angle)} A ${r} ${r} 0 ${large} 1 ${cx + r * Math.cos(end)} ${cy + r * Math.sin(end)} Z`;
          angle = end;
          return `<path d="${path}" fill="${cssVar(p.key)}" />`;
        })
        .join('');
    };

    const loadStats = async () => {
      const stats = await request('GET', '/api/stats');
      openEl.textContent = stats.open_count;
      renderStatusChart(stats.status_by_month);
      renderPriorityChart(stats.priority_distribution);
    };

    const loadTickets = async () => {
      tickets = await request('GET', '/api/tickets');
      renderTable();
    };

    const refresh = async () => {
      await Promise.all([loadTickets(), loadStats()]);
    };

    rowsEl.addEventListener('change', async (event) => {
      const target = event.target;
      if (!target.dataset.field) {
        return;
      }
      const edited = tickets.map((ticket) => ({ ...ticket }));
      edited[Number(target.dataset.index)][target.dataset.field] = target.value;
      try {
        tickets = await request('PUT', '/api/tickets', edited);
        renderTable();
        await loadStats();
      } catch (err) {
        showBanner(err.message, 'error');
        await loadTickets();
      }
    });

    document.getElementById('create-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const descriptionEl = document.getElementById('description');
      try {
        const created = await request('POST', '/api/tickets', {
          description: descriptionEl.value,
          priority: document.getElementById('priority').value
        });
        descriptionEl.value = '';
        const id = created.ticket.id;
        const outcome = created.notification;
        if (outcome.state === 'delivered') {
          showBanner(`${id} created and forwarded.`, 'ok');
        } else if (outcome.state === 'failed') {
          showBanner(`${id} created, but forwarding failed: ${outcome.reason}`, 'error');
        } else {
          showBanner(`${id} created.`, 'info');
        }
        await refresh();
      } catch (err) {
        showBanner(err.message, 'error');
      }
    });

    document.getElementById('reset').addEventListener('click', async () => {
      try {
        await request('POST', '/api/session/reset');
        bannerEl.hidden = true;
        await refresh();
      } catch (err) {
        showBanner(err.message, 'error');
      }
    });

    renderLegend(document.getElementById('status-legend'), STATUSES);
    renderLegend(document.getElementById('priority-legend'), PRIORITIES);
    refresh().catch((err) => showBanner(err.message, 'error'));
  </script>
</body>
</html>
"#;
