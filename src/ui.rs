use crate::dashboard::Dashboard;

pub fn render_index(dashboard: &Dashboard) -> String {
    let stats = dashboard.weekly_stats();
    INDEX_HTML
        .replace("{{TOTAL}}", &dashboard.total_calories().to_string())
        .replace("{{GOAL}}", &dashboard.calorie_goal.to_string())
        .replace("{{WATER}}", &dashboard.water_intake.to_string())
        .replace("{{WATER_GOAL}}", &dashboard.water_goal.to_string())
        .replace("{{AVG_CALORIES}}", &stats.avg_calories.to_string())
        .replace("{{MOOD_TREND}}", stats.mood_trend.label())
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Health Dashboard</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg: #eef6f1;
      --ink: #1f2b27;
      --muted: #66736e;
      --accent: #2f9e6e;
      --water: #3b82f6;
      --warn: #d9534f;
      --card: #ffffff;
      --shadow: 0 18px 40px rgba(31, 43, 39, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg), #fdf8ee);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 28px 16px 48px;
    }

    .app {
      width: min(1040px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.15rem;
    }

    nav {
      display: flex;
      gap: 8px;
    }

    .tab {
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      font: inherit;
      font-weight: 600;
      background: rgba(31, 43, 39, 0.08);
      cursor: pointer;
    }

    .tab.active {
      background: var(--accent);
      color: white;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 18px;
    }

    .card {
      background: var(--card);
      border-radius: 20px;
      padding: 20px;
      box-shadow: var(--shadow);
    }

    .big {
      font-size: 2rem;
      font-weight: 600;
    }

    .muted {
      color: var(--muted);
      font-size: 0.9rem;
    }

    .bar {
      height: 10px;
      border-radius: 999px;
      background: rgba(31, 43, 39, 0.08);
      overflow: hidden;
      margin: 10px 0;
    }

    .bar > div {
      height: 100%;
      background: var(--accent);
    }

    .bar.water > div {
      background: var(--water);
    }

    .row {
      display: flex;
      gap: 8px;
      align-items: center;
    }

    input {
      flex: 1;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(31, 43, 39, 0.18);
      font: inherit;
      min-width: 0;
    }

    button.action {
      border: none;
      border-radius: 12px;
      padding: 10px 14px;
      font: inherit;
      font-weight: 600;
      background: var(--accent);
      color: white;
      cursor: pointer;
    }

    button.action:disabled {
      opacity: 0.5;
      cursor: default;
    }

    .mood button {
      flex: 1;
      border: 1px solid rgba(31, 43, 39, 0.15);
      background: white;
      border-radius: 12px;
      padding: 10px 0;
      font-size: 1.2rem;
      cursor: pointer;
    }

    .mood button.active {
      background: #fff4c2;
      border-color: #e0b800;
    }

    ul.list {
      list-style: none;
      padding: 0;
      margin: 12px 0 0;
      display: grid;
      gap: 6px;
      max-height: 240px;
      overflow-y: auto;
    }

    ul.list li {
      display: flex;
      justify-content: space-between;
      gap: 12px;
      padding: 8px 10px;
      border-radius: 10px;
      background: rgba(31, 43, 39, 0.04);
    }

    #chart {
      width: 100%;
      height: 240px;
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .trend-up {
      color: var(--accent);
    }

    .trend-down {
      color: var(--warn);
    }

    .chat-log {
      height: 320px;
      overflow-y: auto;
      display: grid;
      align-content: start;
      gap: 10px;
      margin-bottom: 12px;
    }

    .msg {
      max-width: 80%;
      padding: 10px 14px;
      border-radius: 14px;
      white-space: pre-wrap;
    }

    .msg.user {
      justify-self: end;
      background: var(--accent);
      color: white;
    }

    .msg.assistant {
      justify-self: start;
      background: rgba(31, 43, 39, 0.06);
    }

    .quote {
      font-style: italic;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
      color: var(--warn);
    }

    [hidden] {
      display: none !important;
    }
  </style>
</head>
<body>
  <main class="app">
    <header class="row" style="justify-content: space-between; flex-wrap: wrap;">
      <h1>Health Dashboard</h1>
      <nav>
        <button class="tab active" type="button" data-view="dashboard">Dashboard</button>
        <button class="tab" type="button" data-view="reports">Reports</button>
        <button class="tab" type="button" data-view="assistant">Assistant</button>
      </nav>
    </header>

    <section class="card quote">
      <span id="quote-text"></span>
      <span class="muted" id="quote-author"></span>
    </section>

    <div class="status" id="status"></div>

    <section id="view-dashboard" class="grid">
      <div class="card">
        <h2>Calories</h2>
        <div class="big"><span id="total">{{TOTAL}}</span> kcal</div>
        <div class="bar"><div id="calorie-bar" style="width: 0%"></div></div>
        <p class="muted">Goal: <span id="goal">{{GOAL}}</span> calories</p>
        <form class="row" id="goal-form">
          <input id="goal-input" type="number" min="1" placeholder="New goal" />
          <button class="action" type="submit">Edit Goal</button>
        </form>
      </div>

      <div class="card">
        <h2>Water</h2>
        <div class="row" style="justify-content: space-between;">
          <button class="action" type="button" data-water="sub">-</button>
          <span class="big"><span id="water">{{WATER}}</span>/<span id="water-goal">{{WATER_GOAL}}</span></span>
          <button class="action" type="button" data-water="add">+</button>
        </div>
        <div class="bar water"><div id="water-bar" style="width: 0%"></div></div>
        <p class="muted">Glasses today</p>
      </div>

      <div class="card">
        <h2>Mood</h2>
        <div class="row mood" id="mood">
          <button type="button" data-rating="1" title="Very Unhappy">&#128577;</button>
          <button type="button" data-rating="2" title="Unhappy">&#128528;</button>
          <button type="button" data-rating="3" title="Neutral">&#128578;</button>
          <button type="button" data-rating="4" title="Happy">&#127881;</button>
          <button type="button" data-rating="5" title="Very Happy">&#10084;&#65039;</button>
        </div>
        <p class="muted" id="mood-label">How are you feeling today?</p>
      </div>

      <div class="card">
        <h2>Add Meal</h2>
        <form class="row" id="meal-form">
          <input id="meal-name" placeholder="Meal name" />
          <input id="meal-calories" type="number" min="1" placeholder="Calories" />
          <button class="action" type="submit">Add</button>
        </form>
        <ul class="list" id="meals"></ul>
      </div>

      <div class="card">
        <h2>Food Calculator</h2>
        <div class="row">
          <input id="food-search" placeholder="Search for Indian dishes..." />
          <input id="food-portion" type="number" min="0.25" step="0.25" value="1" style="max-width: 90px;" />
        </div>
        <ul class="list" id="food-results"></ul>
      </div>

      <div class="card">
        <h2>Insights</h2>
        <ul class="list" id="recommendations"></ul>
      </div>
    </section>

    <section id="view-reports" class="grid" hidden>
      <div class="card" style="grid-column: 1 / -1;">
        <h2>This week</h2>
        <svg id="chart" viewBox="0 0 600 240" role="img" aria-label="Weekly calories and water"></svg>
      </div>
      <div class="card">
        <h2>Average calories</h2>
        <div class="big" id="avg-calories">{{AVG_CALORIES}}</div>
        <p class="muted">Calorie Goal Achievement: <span id="calories-trend"></span>% vs 1800</p>
      </div>
      <div class="card">
        <h2>Average water</h2>
        <div class="big" id="avg-water"></div>
        <p class="muted">Trend: <span id="water-trend"></span>% vs 6 glasses</p>
      </div>
      <div class="card">
        <h2>Average mood</h2>
        <div class="big" id="avg-mood"></div>
        <p class="muted" id="mood-trend">{{MOOD_TREND}}</p>
      </div>
    </section>

    <section id="view-assistant" class="card" hidden>
      <h2>Health Assistant</h2>
      <div class="chat-log" id="chat-log"></div>
      <form class="row" id="chat-form">
        <input id="chat-input" placeholder="Ask about your health..." />
        <button class="action" id="chat-send" type="submit">Send</button>
      </form>
    </section>
  </main>

  <script>
    const $ = (id) => document.getElementById(id);
    const moodLabels = ['', 'Very Unhappy', 'Unhappy', 'Neutral', 'Happy', 'Very Happy'];
    const quotes = [
      { text: 'The greatest wealth is health.', author: 'Virgil' },
      { text: "Take care of your body. It's the only place you have to live.", author: 'Jim Rohn' },
      { text: 'Health is not valued until sickness comes.', author: 'Thomas Fuller' },
      { text: 'Your body hears everything your mind says.', author: 'Naomi Judd' },
      { text: 'The food you eat can be either the safest and most powerful form of medicine or the slowest form of poison.', author: 'Ann Wigmore' },
      { text: 'Let food be thy medicine and medicine be thy food.', author: 'Hippocrates' }
    ];
    let quoteIndex = 0;

    const setStatus = (message) => {
      $('status').textContent = message || '';
    };

    const api = async (path, body) => {
      const init = body === undefined
        ? {}
        : { method: 'POST', headers: { 'content-type': 'application/json' }, body: JSON.stringify(body) };
      const res = await fetch(path, init);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const listItem = (left, right, onClick) => {
      const li = document.createElement('li');
      const name = document.createElement('span');
      name.textContent = left;
      li.appendChild(name);
      if (onClick) {
        const button = document.createElement('button');
        button.className = 'action';
        button.type = 'button';
        button.textContent = right;
        button.addEventListener('click', onClick);
        li.appendChild(button);
      } else {
        const value = document.createElement('strong');
        value.textContent = right;
        li.appendChild(value);
      }
      return li;
    };

    const renderChart = (week) => {
      const width = 600;
      const height = 240;
      const pad = 36;
      const slot = (width - pad * 2) / week.length;
      const maxCalories = Math.max(...week.map((day) => day.calories), 1);
      const maxWater = Math.max(...week.map((day) => day.water), 1);
      const scale = height - pad * 2;
      let svg = '';
      week.forEach((day, i) => {
        const x = pad + i * slot;
        const calH = (day.calories / maxCalories) * scale;
        const waterH = (day.water / maxWater) * scale;
        svg += `<rect x="${x + 6}" y="${height - pad - calH}" width="${slot / 2 - 8}" height="${calH}" fill="#2f9e6e" rx="4" />`;
        svg += `<rect x="${x + slot / 2}" y="${height - pad - waterH}" width="${slot / 2 - 8}" height="${waterH}" fill="#3b82f6" rx="4" />`;
        svg += `<text class="chart-label" x="${x + slot / 2}" y="${height - pad + 16}" text-anchor="middle">${day.day}</text>`;
        svg += `<text class="chart-label" x="${x + slot / 4}" y="${height - pad - calH - 4}" text-anchor="middle">${day.calories}</text>`;
      });
      $('chart').innerHTML = svg;
    };

    const trendClass = (el, value) => {
      el.className = value > 0 ? 'trend-up' : 'trend-down';
    };

    const render = (data) => {
      $('total').textContent = data.total_calories;
      $('goal').textContent = data.calorie_goal;
      $('calorie-bar').style.width = `${Math.min(data.calorie_progress, 100)}%`;
      $('water').textContent = data.water_intake;
      $('water-goal').textContent = data.water_goal;
      $('water-bar').style.width = `${data.water_goal ? (data.water_intake / data.water_goal) * 100 : 0}%`;

      document.querySelectorAll('#mood button').forEach((button) => {
        button.classList.toggle('active', Number(button.dataset.rating) === data.mood_rating);
      });
      $('mood-label').textContent = data.mood_rating ? moodLabels[data.mood_rating] : 'How are you feeling today?';

      const meals = $('meals');
      meals.innerHTML = '';
      data.meals.forEach((meal) => meals.appendChild(listItem(meal.name, `${meal.calories} cal`)));

      const stats = data.stats;
      $('avg-calories').textContent = stats.avgCalories;
      $('avg-water').textContent = stats.avgWater.toFixed(1);
      $('avg-mood').textContent = stats.avgMood.toFixed(1);
      $('calories-trend').textContent = stats.caloriesTrend.toFixed(1);
      $('water-trend').textContent = stats.waterTrend.toFixed(1);
      trendClass($('calories-trend'), stats.caloriesTrend);
      trendClass($('water-trend'), stats.waterTrend);
      $('mood-trend').textContent = stats.moodTrend;
      renderChart(data.week);
      loadAnalysis().catch((err) => setStatus(err.message));
    };

    const loadAnalysis = async () => {
      const analysis = await api('/api/analysis');
      const list = $('recommendations');
      list.innerHTML = '';
      if (!analysis.recommendations.length) {
        list.appendChild(listItem('All metrics on track', ''));
      }
      analysis.recommendations.forEach((rec) => {
        list.appendChild(listItem(`${rec.advice} (${rec.tips.join(', ')})`, rec.priority));
      });
    };

    const renderMessages = (messages) => {
      const log = $('chat-log');
      log.innerHTML = '';
      messages.forEach((msg) => {
        const div = document.createElement('div');
        div.className = `msg ${msg.role}`;
        div.textContent = msg.text;
        log.appendChild(div);
      });
      log.scrollTop = log.scrollHeight;
    };

    const refresh = async () => {
      render(await api('/api/dashboard'));
      renderMessages(await api('/api/messages'));
    };

    const searchFoods = async () => {
      const q = $('food-search').value;
      const portion = $('food-portion').value || '1';
      const results = $('food-results');
      results.innerHTML = '';
      if (!q) {
        return;
      }
      const params = new URLSearchParams({ q, portion });
      const foods = await api(`/api/foods?${params}`);
      foods.forEach((food) => {
        const label = `${food.name} | ${food.serving_size} | ${food.calories_per_100g} cal/100g | ${food.calories} cal`;
        results.appendChild(listItem(label, '+', () => {
          api('/api/foods/add', { name: food.name, portion })
            .then((data) => {
              $('food-search').value = '';
              $('food-portion').value = '1';
              results.innerHTML = '';
              render(data);
            })
            .catch((err) => setStatus(err.message));
        }));
      });
    };

    document.querySelectorAll('.tab').forEach((tab) => {
      tab.addEventListener('click', () => {
        document.querySelectorAll('.tab').forEach((other) => other.classList.toggle('active', other === tab));
        ['dashboard', 'reports', 'assistant'].forEach((view) => {
          $(`view-${view}`).hidden = view !== tab.dataset.view;
        });
      });
    });

    document.querySelectorAll('[data-water]').forEach((button) => {
      button.addEventListener('click', () => {
        api('/api/water', { action: button.dataset.water }).then(render).catch((err) => setStatus(err.message));
      });
    });

    document.querySelectorAll('#mood button').forEach((button) => {
      button.addEventListener('click', () => {
        api('/api/mood', { rating: Number(button.dataset.rating) }).then(render).catch((err) => setStatus(err.message));
      });
    });

    $('goal-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const goal = Number($('goal-input').value);
      api('/api/goal', { calorie_goal: goal })
        .then((data) => {
          $('goal-input').value = '';
          render(data);
        })
        .catch((err) => setStatus(err.message));
    });

    $('meal-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const name = $('meal-name').value;
      const calories = Number($('meal-calories').value);
      if (!name || !calories) {
        return;
      }
      api('/api/meals', { name, calories })
        .then((data) => {
          $('meal-name').value = '';
          $('meal-calories').value = '';
          render(data);
        })
        .catch((err) => setStatus(err.message));
    });

    $('food-search').addEventListener('input', () => searchFoods().catch((err) => setStatus(err.message)));
    $('food-portion').addEventListener('input', () => searchFoods().catch((err) => setStatus(err.message)));

    $('chat-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const input = $('chat-input');
      const message = input.value;
      if (!message.trim() || input.disabled) {
        return;
      }
      input.value = '';
      input.disabled = true;
      $('chat-send').disabled = true;
      const bubble = document.createElement('div');
      bubble.className = 'msg user';
      bubble.textContent = message;
      $('chat-log').appendChild(bubble);
      $('chat-log').scrollTop = $('chat-log').scrollHeight;
      try {
        await api('/api/chat', { message });
        await refresh();
      } catch (err) {
        setStatus(err.message);
      } finally {
        input.disabled = false;
        $('chat-send').disabled = false;
        input.focus();
      }
    });

    const showQuote = () => {
      const quote = quotes[quoteIndex];
      $('quote-text').textContent = `"${quote.text}" `;
      $('quote-author').textContent = `- ${quote.author}`;
      quoteIndex = (quoteIndex + 1) % quotes.length;
    };

    showQuote();
    setInterval(showQuote, 10000);
    refresh().catch((err) => setStatus(err.message));
  </script>
</body>
</html>
"##;
