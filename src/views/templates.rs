pub const BASE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }} | Product Demo</title>
  <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-50">
  <header class="bg-gray-800 shadow-lg">
    <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
      <div class="flex justify-between items-center h-16">
        <a href="/" class="text-xl font-bold text-white">Product Demo</a>
        <nav class="flex space-x-8">
          {% for item in nav %}
          <a href="{{ item.href }}" class="px-3 py-2 rounded-md text-sm font-medium {% if item.active %}bg-blue-600 text-white{% else %}text-gray-300 hover:text-white hover:bg-gray-700{% endif %}">{{ item.name }}</a>
          {% endfor %}
        </nav>
      </div>
    </div>
  </header>
  {% block content %}{% endblock content %}
</body>
</html>
"##;

pub const MACROS: &str = r##"
{% macro banner(color, title, subtitle) %}
<div class="mb-6 bg-{{ color }} rounded-lg p-6 shadow-lg">
  <h3 class="text-lg font-semibold text-white">{{ title }}</h3>
  <p class="text-white opacity-80 mt-1">{{ subtitle }}</p>
</div>
{% endmacro banner %}

{% macro empty_panel(title, message) %}
<div class="text-center py-12">
  <div class="bg-white rounded-lg shadow-md p-8 max-w-md mx-auto">
    <h3 class="text-lg font-semibold text-gray-900 mb-2">{{ title }}</h3>
    <p class="text-gray-600">{{ message }}</p>
  </div>
</div>
{% endmacro empty_panel %}

{% macro stars(filled) %}
<span class="flex">{% for on in filled %}<span class="{% if on %}text-yellow-400{% else %}text-gray-300{% endif %}">&#9733;</span>{% endfor %}</span>
{% endmacro stars %}

{% macro category_grid(categories) %}
<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
  {% for category in categories %}
  <a href="{{ category.url }}" class="group">
    <div class="bg-white rounded-lg shadow-md overflow-hidden hover:shadow-lg transition-all duration-300 group-hover:scale-105">
      <img src="{{ category.image }}" alt="{{ category.name }}" class="w-full h-48 object-cover">
      <div class="p-6">
        <h2 class="text-xl font-semibold text-gray-900 mb-2">{{ category.name }}</h2>
        <p class="text-sm text-gray-500 mb-4">Slug: {{ category.slug }}</p>
        <span class="text-lime-700 font-medium">Browse Products</span>
      </div>
    </div>
  </a>
  {% endfor %}
</div>
{% endmacro category_grid %}
"##;

pub const HOME: &str = r##"{% extends "base.html" %}
{% block content %}
<div class="min-h-screen py-12">
  <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
    <div class="text-center mb-12">
      <h1 class="text-4xl font-bold text-gray-900 mb-4">Product Demo Application</h1>
      <p class="text-xl text-gray-600">Compare different API fetching approaches</p>
    </div>
    <div class="grid md:grid-cols-2 gap-8">
      {% for pattern in patterns %}
      <a href="{{ pattern.href }}" class="group">
        <div class="bg-white rounded-lg shadow-md p-6 hover:shadow-lg border-l-4 border-{{ pattern.color }}">
          <h2 class="text-xl font-semibold text-gray-900 mb-4">{{ pattern.name }}</h2>
          <p class="text-gray-600 mb-4">{{ pattern.summary }}</p>
          <ul class="text-sm text-gray-600 space-y-1">
            {% for point in pattern.points %}<li>&bull; {{ point }}</li>{% endfor %}
          </ul>
          <span class="text-sm font-medium text-blue-600">View Example &rarr;</span>
        </div>
      </a>
      {% endfor %}
    </div>
  </div>
</div>
{% endblock content %}
"##;

/// Shared shell for pages whose data is fetched by the browser.
pub const CLIENT_SHELL: &str = r##"{% extends "base.html" %}
{% import "macros.html" as macros %}
{% block content %}
<div class="min-h-screen bg-{{ shell.background }} py-8">
  <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
    {{ macros::banner(color=shell.banner_color, title=shell.banner_title, subtitle=shell.banner_subtitle) }}
    {% if shell.heading %}
    <div class="text-center mb-8">
      <h1 class="text-3xl font-bold text-gray-900">{{ shell.heading }}</h1>
      <p class="mt-2 text-gray-600">{{ shell.subheading }}</p>
    </div>
    {% endif %}
    <div id="page"
         data-state="{{ page.state }}"
         data-source="{{ shell.source }}"
         data-view="{{ shell.view }}"
         data-link-prefix="{{ shell.link_prefix }}"
         data-error-title="{{ shell.error_title }}">
      <div class="flex flex-col items-center justify-center py-24">
        <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-gray-900"></div>
        <p class="mt-4 text-gray-600">{{ shell.loading_message }}</p>
      </div>
    </div>
  </div>
</div>
{% include "client_script.html" %}
{% endblock content %}
"##;

pub const CLIENT_SCRIPT: &str = r##"{% raw %}<script>
(function () {
  const root = document.getElementById('page');
  if (!root) return;

  const esc = (value) => String(value == null ? '' : value).replace(/[&<>"']/g, (c) => (
    { '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;' }[c]
  ));
  const originalPrice = (p) => (p.discountPercentage > 0 && p.discountPercentage < 100)
    ? (p.price / (1 - p.discountPercentage / 100)).toFixed(2)
    : null;

  let settled = false;
  function settle(state, html) {
    if (settled) return;
    settled = true;
    root.dataset.state = state;
    root.innerHTML = html;
  }

  function errorPanel(message) {
    return '<div class="bg-red-50 border border-red-200 rounded-md p-4">' +
      '<h3 class="text-sm font-medium text-red-800">' + esc(root.dataset.errorTitle) + '</h3>' +
      '<p class="mt-1 text-sm text-red-700">' + esc(message) + '</p></div>';
  }

  function card(p) {
    const prefix = root.dataset.linkPrefix;
    const body = '<div class="bg-white rounded-lg shadow-md overflow-hidden">' +
      '<img src="' + esc(p.thumbnail) + '" alt="' + esc(p.title) + '" class="w-full h-48 object-cover">' +
      '<div class="p-6"><span class="text-xs uppercase text-gray-500">' + esc(p.category) + '</span>' +
      '<h2 class="text-xl font-semibold text-gray-900 mb-2">' + esc(p.title) + '</h2>' +
      '<p class="text-gray-600 text-sm mb-4">' + esc(p.description) + '</p>' +
      '<div class="flex justify-between"><span class="text-2xl font-bold">$' + esc(p.price) + '</span>' +
      (p.discountPercentage > 0 ? '<span class="text-green-700">-' + esc(p.discountPercentage) + '%</span>' : '') +
      '<span class="text-sm text-gray-500">Stock: ' + esc(p.stock) + '</span></div>' +
      (p.brand ? '<p class="text-sm text-gray-500 mt-2">Brand: ' + esc(p.brand) + '</p>' : '') +
      '</div></div>';
    return prefix ? '<a href="' + esc(prefix + p.id) + '">' + body + '</a>' : body;
  }

  function listing(data) {
    return '<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">' +
      data.products.map(card).join('') + '</div>' +
      '<div class="mt-8 text-center text-gray-600"><p>Showing ' + data.products.length +
      ' of ' + esc(data.total) + ' products</p></div>';
  }

  function detail(p) {
    const images = p.images || [];
    const reviews = p.reviews || [];
    const original = originalPrice(p);
    const dims = p.dimensions
      ? esc(p.dimensions.width) + '&quot; &times; ' + esc(p.dimensions.height) + '&quot; &times; ' + esc(p.dimensions.depth) + '&quot;'
      : '';
    return '<div class="bg-white rounded-lg shadow-md p-6 mb-8 grid md:grid-cols-2 gap-8">' +
      '<div><img id="main-image" src="' + esc(images[0] || p.thumbnail) + '" alt="' + esc(p.title) + '" class="w-full rounded-lg">' +
      '<div class="flex gap-2 mt-4">' + images.map((src, i) =>
        '<img src="' + esc(src) + '" data-thumb="' + esc(src) + '" alt="' + esc(p.title) + ' - Image ' + (i + 1) +
        '" class="w-16 h-16 object-cover rounded cursor-pointer border-2 ' + (i === 0 ? 'border-purple-500' : 'border-transparent') + '">'
      ).join('') + '</div></div>' +
      '<div><h1 class="text-3xl font-bold text-gray-900">' + esc(p.title) + '</h1>' +
      '<p class="text-gray-500">' + esc(p.brand) + ' &middot; ' + esc(p.category) + '</p>' +
      '<p class="mt-2">&#9733; ' + esc(p.rating) + ' <span class="ml-1 text-sm text-gray-500">(' + reviews.length + ' reviews)</span></p>' +
      '<p class="mt-4"><span class="text-3xl font-bold text-purple-600">$' + esc(p.price) + '</span>' +
      (original ? ' <span class="line-through text-gray-500">$' + original + '</span>' : '') + '</p>' +
      '<p class="mt-4 text-gray-700">' + esc(p.description) + '</p>' +
      '<ul class="mt-4 text-sm text-gray-600 space-y-1">' +
      '<li>SKU: ' + esc(p.sku) + '</li><li>Stock: ' + esc(p.stock) + ' (' + esc(p.availabilityStatus) + ')</li>' +
      '<li>Dimensions: ' + dims + '</li>' +
      '<li>Barcode: ' + esc(p.meta && p.meta.barcode) + '</li>' +
      '<li>Shipping: ' + esc(p.shippingInformation) + '</li>' +
      '<li>Warranty: ' + esc(p.warrantyInformation) + '</li>' +
      '<li>Returns: ' + esc(p.returnPolicy) + '</li></ul>' +
      (p.meta && p.meta.qrCode ? '<img src="' + esc(p.meta.qrCode) + '" alt="Product QR Code" class="w-32 h-32 mt-4">' : '') +
      '</div></div>' +
      (reviews.length ? '<div class="bg-white rounded-lg shadow-md p-6"><h3 class="text-xl font-semibold mb-6">Customer Reviews (' +
        reviews.length + ')</h3><div class="grid md:grid-cols-2 gap-6">' + reviews.map((r) =>
          '<div class="border border-gray-200 rounded-lg p-4"><div class="flex justify-between mb-2"><span>' +
          '&#9733;'.repeat(Math.round(r.rating)) + ' ' + esc(r.rating) + '/5</span><span class="text-xs text-gray-500">' +
          esc(new Date(r.date).toLocaleDateString()) + '</span></div><p class="text-gray-700 mb-2">' + esc(r.comment) +
          '</p><p class="text-sm text-gray-500">- ' + esc(r.reviewerName) + '</p></div>'
        ).join('') + '</div></div>' : '');
  }

  function bindGallery() {
    const main = document.getElementById('main-image');
    if (!main) return;
    root.querySelectorAll('[data-thumb]').forEach((thumb) => {
      thumb.addEventListener('click', () => {
        main.src = thumb.dataset.thumb;
        root.querySelectorAll('[data-thumb]').forEach((t) => {
          t.classList.toggle('border-purple-500', t === thumb);
          t.classList.toggle('border-transparent', t !== thumb);
        });
      });
    });
  }

  fetch(root.dataset.source)
    .then((res) => {
      if (!res.ok) throw new Error('HTTP error! status: ' + res.status);
      return res.json();
    })
    .then((data) => {
      settle('loaded', root.dataset.view === 'detail' ? detail(data) : listing(data));
      bindGallery();
    })
    .catch((err) => {
      console.error(err);
      settle('error', errorPanel(err instanceof Error ? err.message : 'An unknown error occurred'));
    });
})();
</script>{% endraw %}
"##;

pub const SERVER_CATEGORIES: &str = r##"{% extends "base.html" %}
{% import "macros.html" as macros %}
{% block content %}
<div class="min-h-screen bg-purple-50 py-8">
  <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
    {{ macros::banner(color="green-800", title="Server-Rendered Page", subtitle="This page fetches data from the /api/ex3 route handler on the server") }}
    <div class="text-center mb-8">
      <h1 class="text-3xl font-bold text-gray-900">Product Categories</h1>
      <p class="mt-2 text-gray-600">Browse our collection by category</p>
    </div>
    {% if count > 0 %}
      {{ macros::category_grid(categories=page.data) }}
      <div class="mt-8 text-center text-gray-600"><p>Showing {{ count }} categories</p></div>
    {% else %}
      {{ macros::empty_panel(title="No Categories Found", message="Unable to load product categories at this time.") }}
    {% endif %}
  </div>
</div>
{% endblock content %}
"##;

pub const CATEGORY_INDEX: &str = r##"{% extends "base.html" %}
{% import "macros.html" as macros %}
{% block content %}
<div class="min-h-screen bg-lime-50 py-8">
  <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
    {{ macros::banner(color="lime-600", title="Static Site Generation (SSG) with pre-built params", subtitle="Category pages are pre-generated at build time for maximum performance") }}
    <div class="text-center mb-8 bg-lime-100 rounded-lg p-8">
      <h1 class="text-3xl font-bold text-lime-800">SSG Product Categories</h1>
      <p class="mt-2 text-lime-800">Browse pre-generated category pages</p>
      <div class="mt-4 bg-white rounded-lg p-4 shadow-sm">
        <p class="text-sm text-lime-800"><span class="font-semibold">How it works:</span> All {{ count }} category pages are pre-generated at build time by the <code class="bg-gray-100 px-2 py-1 rounded">prerender</code> binary</p>
      </div>
    </div>
    {% if count > 0 %}
      {{ macros::category_grid(categories=page.data) }}
    {% else %}
      {{ macros::empty_panel(title="No Categories Found", message="Unable to load product categories at this time.") }}
    {% endif %}
    <div class="mt-8 text-center text-lime-800"><p>Showing {{ count }} pre-generated category pages</p></div>
  </div>
</div>
{% endblock content %}
"##;

pub const CATEGORY_PRODUCTS: &str = r##"{% extends "base.html" %}
{% import "macros.html" as macros %}
{% block content %}
<div class="min-h-screen bg-orange-50 py-8">
  <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
    {{ macros::banner(color="orange-800", title="Static Site Generation (SSG)", subtitle="This page is pre-generated at build time and revalidated hourly") }}
    <nav class="mb-6 text-sm">
      <a href="/" class="text-blue-600 hover:text-blue-800 font-medium">Home</a>
      <span class="text-gray-400">/</span>
      <a href="/ui/ex4" class="text-orange-600 hover:text-orange-800 font-medium">Categories</a>
      <span class="text-gray-400">/</span>
      <span class="text-gray-700 font-medium">{{ category_name }}</span>
    </nav>
    <div class="text-center mb-8">
      <h1 class="text-3xl font-bold text-gray-900">{{ category_name }}</h1>
      <p class="mt-2 text-gray-600">{% if total > 0 %}{{ total }} products found{% else %}No products found{% endif %}</p>
    </div>
    {% if count > 0 %}
    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
      {% for product in page.data %}
      <a href="{{ product.href }}" class="group">
        <div class="bg-white rounded-lg shadow-md overflow-hidden hover:shadow-lg group-hover:scale-105">
          <div class="relative h-48">
            <img src="{{ product.thumbnail }}" alt="{{ product.title }}" class="w-full h-48 object-cover">
            {% if product.discount_badge %}<div class="absolute top-2 right-2 bg-red-500 text-white px-2 py-1 rounded-md text-sm font-semibold">-{{ product.discount_badge }}%</div>{% endif %}
          </div>
          <div class="p-4">
            <h3 class="text-lg font-semibold text-gray-900 mb-2">{{ product.title }}</h3>
            <p class="text-gray-600 text-sm mb-3">{{ product.description }}</p>
            <div class="flex justify-between items-center">
              <span>
                <span class="text-2xl font-bold text-orange-600">${{ product.price }}</span>
                {% if product.original_price %}<span class="text-sm text-gray-500 line-through ml-2">${{ product.original_price }}</span>{% endif %}
              </span>
              <span class="text-sm text-gray-600">&#9733; {{ product.rating }}</span>
            </div>
            <div class="flex justify-between mt-2 text-sm text-gray-500">
              <span>{% if product.brand %}Brand: {{ product.brand }}{% endif %}</span>
              <span class="px-2 py-1 rounded-full text-xs stock-{{ product.stock_level }}">{{ product.stock_label }}</span>
            </div>
            <span class="text-orange-600 font-medium">View Details</span>
          </div>
        </div>
      </a>
      {% endfor %}
    </div>
    {% else %}
      {{ macros::empty_panel(title="No Products Found", message="No products available in this category.") }}
    {% endif %}
  </div>
</div>
{% endblock content %}
"##;

pub const CATEGORY_PRODUCT: &str = r##"{% extends "base.html" %}
{% import "macros.html" as macros %}
{% block content %}
<div class="min-h-screen bg-orange-50 py-8">
  <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
  {% if page.state == "loaded" %}{% set product = page.data %}
    {{ macros::banner(color="orange-800", title="Incremental Static Regeneration", subtitle="Product details fetched server-side with ISR caching") }}
    <nav class="mb-6 text-sm">
      <a href="/" class="text-blue-600 font-medium">Home</a> <span class="text-gray-400">/</span>
      <a href="/ui/ex4" class="text-orange-600 font-medium">Categories</a> <span class="text-gray-400">/</span>
      <a href="{{ product.category_href }}" class="text-orange-600 font-medium">{{ product.category_name }}</a> <span class="text-gray-400">/</span>
      <span class="text-gray-700 font-medium">{{ product.title }}</span>
    </nav>
    <div class="bg-white rounded-lg shadow-md overflow-hidden grid md:grid-cols-2 gap-8 p-6">
      <div class="relative">
        <img src="{{ product.thumbnail }}" alt="{{ product.title }}" class="w-full rounded-lg">
        {% if product.discount_badge %}<div class="absolute top-4 right-4 bg-red-500 text-white px-3 py-1 rounded-full text-sm font-semibold">-{{ product.discount_badge }}% OFF</div>{% endif %}
        <div class="grid grid-cols-4 gap-2 mt-4">
          {% for image in product.images %}<img src="{{ image }}" alt="{{ product.title }} - Image {{ loop.index }}" class="w-full h-20 object-cover rounded">{% endfor %}
        </div>
      </div>
      <div>
        <h1 class="text-3xl font-bold text-gray-900 mb-2">{{ product.title }}</h1>
        {% if product.brand %}<p class="text-gray-500 mb-4">by {{ product.brand }}</p>{% endif %}
        <div class="flex items-center mb-4">{{ macros::stars(filled=product.stars) }}<span class="ml-2">{{ product.rating }}</span><span class="text-gray-500 ml-2">({{ product.review_count }} reviews)</span></div>
        <div class="mb-6">
          <span class="text-3xl font-bold text-orange-600">${{ product.price }}</span>
          {% if product.original_price %}<span class="text-xl text-gray-500 line-through ml-3">${{ product.original_price }}</span>{% endif %}
        </div>
        <p class="text-gray-700 mb-6">{{ product.description }}</p>
        <div class="space-y-2 text-sm text-gray-600">
          <div><span class="font-medium">Availability:</span> <span class="stock-{{ product.stock_level }}">{{ product.stock_label }}</span></div>
          {% if product.dimensions %}<div><span class="font-medium">Dimensions:</span> {{ product.dimensions }}</div>{% endif %}
          {% if product.warranty %}<div><span class="font-medium">Warranty:</span> {{ product.warranty }}</div>{% endif %}
          {% if product.shipping %}<div><span class="font-medium">Shipping:</span> {{ product.shipping }}</div>{% endif %}
          {% if product.return_policy %}<div><span class="font-medium">Returns:</span> {{ product.return_policy }}</div>{% endif %}
        </div>
        {% if product.tags | length > 0 %}<div class="flex flex-wrap gap-2 mt-4">{% for tag in product.tags %}<span class="bg-orange-100 text-orange-800 px-2 py-1 rounded-full text-xs">{{ tag }}</span>{% endfor %}</div>{% endif %}
      </div>
    </div>
    {% if product.reviews | length > 0 %}
    <div class="bg-white rounded-lg shadow-md p-6 mt-8">
      <h3 class="text-xl font-semibold text-gray-900 mb-6">Recent Reviews</h3>
      <div class="space-y-4">
        {% for review in product.reviews %}
        <div class="border-b border-gray-200 pb-4">
          <div class="flex items-center justify-between mb-2">
            <div class="flex items-center">{{ macros::stars(filled=review.stars) }}<span class="ml-2 text-sm font-medium text-gray-700">{{ review.reviewer }}</span></div>
            <span class="text-xs text-gray-500">{{ review.date }}</span>
          </div>
          <p class="text-gray-700">{{ review.comment }}</p>
        </div>
        {% endfor %}
      </div>
    </div>
    {% endif %}
  {% else %}
    {{ macros::empty_panel(title="Product Not Found", message="The requested product could not be found.") }}
  {% endif %}
  </div>
</div>
{% endblock content %}
"##;
